#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use resumetwin_api_client::ResumeBackend;
use resumetwin_cli::{Notifier, ReportSink, ResumeUpload};
use resumetwin_core::{
    AppError, AtsResult, CareerPath, MessageResponse, SelectedFile, SkillSuggestions,
    UploadResponse,
};
use tokio::sync::oneshot;

pub type TestView = ResumeUpload<Arc<FakeBackend>, Arc<RecordingNotifier>, Arc<MemorySink>>;

/// Fake backend plus handles to everything the view talks to.
pub struct TestApp {
    pub view: TestView,
    pub backend: Arc<FakeBackend>,
    pub notifier: Arc<RecordingNotifier>,
    pub sink: Arc<MemorySink>,
}

pub fn setup_test_app() -> TestApp {
    let backend = Arc::new(FakeBackend::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let sink = Arc::new(MemorySink::default());
    let view = ResumeUpload::new(backend.clone(), notifier.clone(), sink.clone());
    TestApp {
        view,
        backend,
        notifier,
        sink,
    }
}

pub fn pdf(name: &str) -> SelectedFile {
    SelectedFile::new(name, b"%PDF-1.4 test resume".to_vec())
}

pub fn transport_error(msg: &str) -> AppError {
    AppError::from(anyhow::anyhow!(msg.to_string()))
}

enum Reply<T> {
    Ready(Result<T, AppError>),
    Held(oneshot::Receiver<Result<T, AppError>>),
}

/// Queue of scripted replies for one endpoint.
pub struct Script<T> {
    replies: Mutex<VecDeque<Reply<T>>>,
    calls: AtomicUsize,
}

impl<T> Default for Script<T> {
    fn default() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl<T> Script<T> {
    pub fn push(&self, reply: Result<T, AppError>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Ready(reply));
    }

    /// Queue a reply that resolves only when the returned sender fires.
    pub fn hold(&self) -> oneshot::Sender<Result<T, AppError>> {
        let (tx, rx) = oneshot::channel();
        self.replies.lock().unwrap().push_back(Reply::Held(rx));
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn next(&self) -> Result<T, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Held(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(transport_error("held reply dropped"))),
            None => Err(transport_error("no scripted reply")),
        }
    }
}

#[derive(Default)]
pub struct FakeBackend {
    pub uploads: Script<UploadResponse>,
    pub skills: Script<SkillSuggestions>,
    pub reports: Script<Bytes>,
    pub emails: Script<MessageResponse>,
    pub uploaded_files: Mutex<Vec<String>>,
    pub skill_requests: Mutex<Vec<(String, CareerPath)>>,
    pub report_requests: Mutex<Vec<AtsResult>>,
    pub email_requests: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn total_calls(&self) -> usize {
        self.uploads.calls() + self.skills.calls() + self.reports.calls() + self.emails.calls()
    }
}

#[async_trait]
impl ResumeBackend for FakeBackend {
    async fn upload_resume(&self, file: &SelectedFile) -> Result<UploadResponse, AppError> {
        self.uploaded_files.lock().unwrap().push(file.name.clone());
        self.uploads.next().await
    }

    async fn suggest_skills(
        &self,
        resume_text: &str,
        career_path: CareerPath,
    ) -> Result<SkillSuggestions, AppError> {
        self.skill_requests
            .lock()
            .unwrap()
            .push((resume_text.to_string(), career_path));
        self.skills.next().await
    }

    async fn download_report(&self, ats_result: &AtsResult) -> Result<Bytes, AppError> {
        self.report_requests.lock().unwrap().push(ats_result.clone());
        self.reports.next().await
    }

    async fn send_email(&self, email: &str) -> Result<MessageResponse, AppError> {
        self.email_requests.lock().unwrap().push(email.to_string());
        self.emails.next().await
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct MemorySink {
    saved: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().unwrap().clone()
    }
}

impl ReportSink for MemorySink {
    fn save(&self, filename: &str, content: &[u8]) -> Result<PathBuf, AppError> {
        self.saved
            .lock()
            .unwrap()
            .push((filename.to_string(), content.to_vec()));
        Ok(PathBuf::from(filename))
    }
}
