//! Detection session state machine.
//!
//! The session owns what the user sees: which file is selected, whether a
//! prediction is running, and the last result or error. Network calls run as
//! spawned tasks that report back over a channel the session holds. Selecting
//! or clearing a file drops that channel, so a superseded request can never
//! write into the session.

use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{debug, info, warn};
use veriframe_client::Predictor;
use veriframe_core::{validate, CandidateFile, DetectError, PredictionResult, Result, ValidationOutcome};

use crate::preview::PreviewHandle;

/// User-visible stage of a session
#[derive(Debug)]
pub enum SessionState {
    /// Nothing selected
    Idle,
    /// A valid file is selected and ready to submit
    FileSelected(CandidateFile),
    /// A prediction for the file is in flight
    Submitting(CandidateFile),
    /// The service classified the file
    Succeeded(CandidateFile, PredictionResult),
    /// The prediction failed; the file may be resubmitted
    Failed(CandidateFile, DetectError),
}

impl SessionState {
    /// The file this state refers to, if any
    #[must_use]
    pub const fn file(&self) -> Option<&CandidateFile> {
        match self {
            Self::Idle => None,
            Self::FileSelected(f) | Self::Submitting(f) | Self::Succeeded(f, _) | Self::Failed(f, _) => Some(f),
        }
    }

    /// Short name for logging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::FileSelected(_) => "file_selected",
            Self::Submitting(_) => "submitting",
            Self::Succeeded(..) => "succeeded",
            Self::Failed(..) => "failed",
        }
    }
}

/// What happened when `submit` was called
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request was issued; `poll` or `settle` applies its outcome
    Started {
        /// Identifier of the new request
        request_id: u64,
    },
    /// A request is already in flight; nothing was sent
    AlreadySubmitting,
    /// No file is selected; the notice was set
    NoFileSelected,
    /// No tokio runtime is running; the session moved to `Failed`
    NoRuntime,
}

/// The request the session is currently waiting on
struct InFlight {
    request_id: u64,
    outcome: oneshot::Receiver<Result<PredictionResult>>,
}

/// One user's upload-through-result flow
pub struct DetectionSession {
    predictor: Arc<dyn Predictor>,
    state: SessionState,
    generation: u64,
    next_request_id: u64,
    in_flight: Option<InFlight>,
    notice: Option<DetectError>,
    preview: Option<PreviewHandle>,
}

impl DetectionSession {
    /// Create an idle session
    #[must_use]
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self {
            predictor,
            state: SessionState::Idle,
            generation: 0,
            next_request_id: 0,
            in_flight: None,
            notice: None,
            preview: None,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// File-selection generation; bumped on every select or clear
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Last surfaced message that did not change state (rejection, nothing selected)
    #[must_use]
    pub const fn notice(&self) -> Option<&DetectError> {
        self.notice.as_ref()
    }

    /// Preview of the selected file
    #[must_use]
    pub const fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    /// Result of the last successful prediction
    #[must_use]
    pub const fn result(&self) -> Option<&PredictionResult> {
        match &self.state {
            SessionState::Succeeded(_, result) => Some(result),
            _ => None,
        }
    }

    /// Error of the last failed prediction
    #[must_use]
    pub const fn error(&self) -> Option<&DetectError> {
        match &self.state {
            SessionState::Failed(_, err) => Some(err),
            _ => None,
        }
    }

    /// Returns true while a prediction is in flight
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.state, SessionState::Submitting(_))
    }

    /// Select a new file, replacing whatever was selected.
    ///
    /// Accepted files move the session to `FileSelected`; rejected files leave
    /// it `Idle` with the reason as the notice. Either way any previous result,
    /// error and preview are dropped, and an in-flight request becomes stale.
    pub fn select_file(&mut self, file: CandidateFile) -> ValidationOutcome {
        let outcome = validate(&file);
        self.generation += 1;
        self.in_flight = None;
        self.preview = None;

        match &outcome {
            ValidationOutcome::Accepted => {
                info!(name = file.name(), size = file.size(), generation = self.generation, "file selected");
                self.preview = Some(PreviewHandle::acquire(&file));
                self.notice = None;
                self.state = SessionState::FileSelected(file);
            }
            ValidationOutcome::Rejected(reason) => {
                info!(name = file.name(), reason = %reason, "file rejected");
                self.notice = Some(reason.clone().into());
                self.state = SessionState::Idle;
            }
        }

        outcome
    }

    /// Drop the selected file and return to `Idle`
    pub fn clear_file(&mut self) {
        self.generation += 1;
        self.in_flight = None;
        self.preview = None;
        self.notice = None;
        self.state = SessionState::Idle;
        debug!(generation = self.generation, "selection cleared");
    }

    /// Identifier of the request in flight, if any
    #[must_use]
    pub fn active_request(&self) -> Option<u64> {
        self.in_flight.as_ref().map(|f| f.request_id)
    }

    /// Submit the selected file.
    ///
    /// A request that already resolved is applied first. While a request is
    /// still in flight further calls are no-ops. The request is spawned on the
    /// current tokio runtime; without one the session fails the file instead.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.poll();

        let file = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Submitting(file) => {
                self.state = SessionState::Submitting(file);
                debug!("submit ignored: request already in flight");
                return SubmitOutcome::AlreadySubmitting;
            }
            SessionState::Idle => {
                self.notice = Some(DetectError::NoFileSelected);
                return SubmitOutcome::NoFileSelected;
            }
            SessionState::FileSelected(file) | SessionState::Succeeded(file, _) | SessionState::Failed(file, _) => {
                file
            }
        };
        self.notice = None;

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!(error = %e, "cannot submit without a tokio runtime");
                self.state = SessionState::Failed(file, DetectError::Client(e.to_string()));
                return SubmitOutcome::NoRuntime;
            }
        };

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        let (tx, rx) = oneshot::channel();

        let predictor = Arc::clone(&self.predictor);
        let upload = file.clone();
        let request = runtime.spawn(async move { predictor.predict(&upload).await });
        runtime.spawn(async move {
            let outcome = request
                .await
                .unwrap_or_else(|e| Err(DetectError::Client(e.to_string())));
            // The receiver is gone if the selection changed meanwhile
            let _ = tx.send(outcome);
        });

        info!(name = file.name(), generation = self.generation, request_id, "submitting");
        self.in_flight = Some(InFlight {
            request_id,
            outcome: rx,
        });
        self.state = SessionState::Submitting(file);

        SubmitOutcome::Started { request_id }
    }

    /// Apply the in-flight request if it has resolved, without waiting.
    ///
    /// Returns true if the session left `Submitting`.
    pub fn poll(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return false;
        };
        let outcome = match in_flight.outcome.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(e @ TryRecvError::Closed) => Err(DetectError::Client(e.to_string())),
        };
        self.finish(outcome);
        true
    }

    /// Wait for the in-flight request, if any, and apply its outcome.
    ///
    /// Cancel safe: dropping the returned future leaves the request owned by
    /// the session, to be applied by a later `poll`, `settle` or `submit`.
    pub async fn settle(&mut self) -> &SessionState {
        if let Some(in_flight) = self.in_flight.as_mut() {
            let outcome = (&mut in_flight.outcome)
                .await
                .unwrap_or_else(|e| Err(DetectError::Client(e.to_string())));
            self.finish(outcome);
        }
        &self.state
    }

    /// Submit and wait for the outcome
    pub async fn submit_and_settle(&mut self) -> &SessionState {
        self.submit();
        self.settle().await
    }

    fn finish(&mut self, outcome: Result<PredictionResult>) {
        let Some(in_flight) = self.in_flight.take() else {
            return;
        };

        let file = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Submitting(file) => file,
            other => {
                self.state = other;
                return;
            }
        };

        self.state = match outcome {
            Ok(result) => {
                info!(
                    request_id = in_flight.request_id,
                    label = %result.label,
                    confidence = result.confidence,
                    "prediction succeeded"
                );
                SessionState::Succeeded(file, result)
            }
            Err(err) => {
                info!(request_id = in_flight.request_id, error = %err, "prediction failed");
                SessionState::Failed(file, err)
            }
        };
    }
}

impl std::fmt::Debug for DetectionSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectionSession")
            .field("state", &self.state.name())
            .field("generation", &self.generation)
            .field("active_request", &self.active_request())
            .field("notice", &self.notice)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use veriframe_client::VeriframeClient;
    use veriframe_core::{Label, Probabilities, RawScores, ValidationError};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_result(label: Label) -> PredictionResult {
        PredictionResult {
            label,
            class_index: None,
            confidence: 0.9,
            probabilities: Probabilities {
                authentic: 0.9,
                tampered: 0.1,
            },
            raw_scores: RawScores {
                class0: 1.0,
                class1: -1.0,
            },
        }
    }

    /// Counts calls and echoes a fixed verdict
    #[derive(Default)]
    struct CountingPredictor {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Predictor for CountingPredictor {
        async fn predict(&self, _file: &CandidateFile) -> Result<PredictionResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(sample_result(Label::Authentic))
        }
    }

    /// Fails every request with a server rejection
    struct FailingPredictor;

    #[async_trait]
    impl Predictor for FailingPredictor {
        async fn predict(&self, _file: &CandidateFile) -> Result<PredictionResult> {
            Err(DetectError::ServerRejected {
                status: 500,
                message: "boom".into(),
            })
        }
    }

    /// Answers after a per-file delay, labelling `a.*` files Tampered
    struct SlowPredictor {
        calls: AtomicUsize,
        delay_a: Duration,
        delay_other: Duration,
    }

    impl SlowPredictor {
        fn new(delay_a: Duration, delay_other: Duration) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay_a,
                delay_other,
            }
        }
    }

    #[async_trait]
    impl Predictor for SlowPredictor {
        async fn predict(&self, file: &CandidateFile) -> Result<PredictionResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if file.name().starts_with("a.") {
                tokio::time::sleep(self.delay_a).await;
                Ok(sample_result(Label::Tampered))
            } else {
                tokio::time::sleep(self.delay_other).await;
                Ok(sample_result(Label::Authentic))
            }
        }
    }

    /// Panics inside the request task
    struct PanickingPredictor;

    #[async_trait]
    impl Predictor for PanickingPredictor {
        async fn predict(&self, _file: &CandidateFile) -> Result<PredictionResult> {
            panic!("model exploded")
        }
    }

    fn jpeg(name: &str, size: usize) -> CandidateFile {
        CandidateFile::new(name, vec![0u8; size]).with_media_type("image/jpeg")
    }

    fn started(outcome: SubmitOutcome) -> u64 {
        match outcome {
            SubmitOutcome::Started { request_id } => request_id,
            other => panic!("expected Started, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_select_valid_file() {
        let mut session = DetectionSession::new(Arc::new(CountingPredictor::default()));
        assert!(matches!(session.state(), SessionState::Idle));

        let outcome = session.select_file(jpeg("a.jpg", 10));
        assert!(outcome.is_accepted());
        assert!(matches!(session.state(), SessionState::FileSelected(f) if f.name() == "a.jpg"));
        assert!(session.preview().is_some());
        assert!(session.notice().is_none());
        assert_eq!(session.generation(), 1);
    }

    #[tokio::test]
    async fn test_select_rejected_file_stays_idle() {
        let mut session = DetectionSession::new(Arc::new(CountingPredictor::default()));
        let pdf = CandidateFile::new("doc.pdf", vec![0u8; 10]).with_media_type("application/pdf");

        let outcome = session.select_file(pdf);
        assert!(matches!(
            outcome,
            ValidationOutcome::Rejected(ValidationError::UnsupportedType { .. })
        ));
        assert!(matches!(session.state(), SessionState::Idle));
        assert!(session.preview().is_none());
        assert!(matches!(
            session.notice(),
            Some(DetectError::Validation(ValidationError::UnsupportedType { .. }))
        ));
    }

    #[tokio::test]
    async fn test_rejected_file_replaces_previous_selection() {
        let mut session = DetectionSession::new(Arc::new(CountingPredictor::default()));
        session.select_file(jpeg("a.jpg", 10));
        session.select_file(jpeg("huge.jpg", 10_485_761));
        assert!(matches!(session.state(), SessionState::Idle));
        assert!(session.preview().is_none());
    }

    #[tokio::test]
    async fn test_submit_without_file() {
        let predictor = Arc::new(CountingPredictor::default());
        let mut session = DetectionSession::new(predictor.clone());

        assert!(matches!(session.submit(), SubmitOutcome::NoFileSelected));
        assert!(matches!(session.state(), SessionState::Idle));
        let notice = session.notice().unwrap();
        assert!(matches!(notice, DetectError::NoFileSelected));
        assert_eq!(notice.to_string(), "Please select an image first");
        assert_eq!(predictor.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_success() {
        let predictor = Arc::new(CountingPredictor::default());
        let mut session = DetectionSession::new(predictor.clone());
        session.select_file(jpeg("a.jpg", 10));

        let request_id = started(session.submit());
        assert!(session.is_submitting());
        assert_eq!(session.active_request(), Some(request_id));
        session.settle().await;
        assert_eq!(session.active_request(), None);

        assert!(matches!(session.state(), SessionState::Succeeded(f, _) if f.name() == "a.jpg"));
        assert_eq!(session.result().unwrap().label, Label::Authentic);
        assert_eq!(predictor.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_double_submit_sends_one_request() {
        let predictor = Arc::new(CountingPredictor::default());
        let mut session = DetectionSession::new(predictor.clone());
        session.select_file(jpeg("a.jpg", 10));

        started(session.submit());
        assert_eq!(session.submit(), SubmitOutcome::AlreadySubmitting);
        assert!(session.is_submitting());

        session.settle().await;
        assert_eq!(predictor.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_then_resubmit() {
        let mut session = DetectionSession::new(Arc::new(FailingPredictor));
        session.select_file(jpeg("a.jpg", 10));

        session.submit_and_settle().await;
        assert_eq!(session.error().unwrap().to_string(), "boom");
        assert!(session.result().is_none());

        started(session.submit());
        assert!(session.error().is_none());
        assert!(session.is_submitting());
        session.settle().await;
        assert!(matches!(session.state(), SessionState::Failed(..)));
    }

    #[tokio::test]
    async fn test_new_selection_clears_result() {
        let mut session = DetectionSession::new(Arc::new(CountingPredictor::default()));
        session.select_file(jpeg("a.jpg", 10));
        session.submit_and_settle().await;
        assert!(session.result().is_some());

        session.select_file(jpeg("b.jpg", 10));
        assert!(session.result().is_none());
        assert!(session.error().is_none());
        assert!(matches!(session.state(), SessionState::FileSelected(f) if f.name() == "b.jpg"));
    }

    #[tokio::test]
    async fn test_clear_after_failure() {
        let mut session = DetectionSession::new(Arc::new(FailingPredictor));
        session.select_file(jpeg("a.jpg", 10));
        session.submit_and_settle().await;
        assert!(session.error().is_some());

        session.clear_file();
        assert!(matches!(session.state(), SessionState::Idle));
        assert!(session.error().is_none());
        assert!(session.preview().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_result_discarded_after_reselect() {
        let predictor = Arc::new(SlowPredictor::new(Duration::from_millis(100), Duration::from_millis(100)));
        let mut session = DetectionSession::new(predictor.clone());
        session.select_file(jpeg("a.jpg", 10));
        started(session.submit());

        session.select_file(jpeg("b.jpg", 10));
        assert_eq!(session.active_request(), None);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(predictor.calls.load(Ordering::SeqCst), 1);
        assert!(!session.poll());
        assert!(matches!(session.settle().await, SessionState::FileSelected(f) if f.name() == "b.jpg"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_result_does_not_overwrite_newer_request() {
        let predictor = Arc::new(SlowPredictor::new(Duration::from_millis(300), Duration::from_millis(50)));
        let mut session = DetectionSession::new(predictor);
        session.select_file(jpeg("a.jpg", 10));
        let first = started(session.submit());

        session.select_file(jpeg("b.jpg", 10));
        let second = started(session.submit());
        assert_ne!(first, second);

        session.settle().await;
        assert!(matches!(session.state(), SessionState::Succeeded(f, r) if f.name() == "b.jpg" && r.label == Label::Authentic));

        // The first request resolves later and must not touch the session
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(!session.poll());
        assert!(matches!(session.state(), SessionState::Succeeded(f, _) if f.name() == "b.jpg"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_result_after_clear() {
        let predictor = Arc::new(SlowPredictor::new(Duration::from_millis(100), Duration::from_millis(100)));
        let mut session = DetectionSession::new(predictor);
        session.select_file(jpeg("a.jpg", 10));
        started(session.submit());

        session.clear_file();
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!session.poll());
        assert!(matches!(session.settle().await, SessionState::Idle));
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_wait_does_not_wedge_session() {
        let predictor = Arc::new(SlowPredictor::new(Duration::from_millis(100), Duration::from_millis(100)));
        let mut session = DetectionSession::new(predictor.clone());
        session.select_file(jpeg("a.jpg", 10));
        started(session.submit());

        // Caller gives up waiting before the request resolves
        let gave_up = tokio::time::timeout(Duration::from_millis(10), session.settle()).await;
        assert!(gave_up.is_err());
        assert!(session.is_submitting());

        tokio::time::sleep(Duration::from_millis(200)).await;

        // The resolved request is applied and a fresh one starts
        started(session.submit());
        assert_eq!(predictor.calls.load(Ordering::SeqCst), 1);
        session.settle().await;
        assert_eq!(predictor.calls.load(Ordering::SeqCst), 2);
        assert!(matches!(session.state(), SessionState::Succeeded(f, _) if f.name() == "a.jpg"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_applies_resolved_request() {
        let predictor = Arc::new(SlowPredictor::new(Duration::from_millis(100), Duration::from_millis(100)));
        let mut session = DetectionSession::new(predictor);
        session.select_file(jpeg("a.jpg", 10));
        started(session.submit());

        assert!(!session.poll());
        assert!(session.is_submitting());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(session.poll());
        assert_eq!(session.result().unwrap().label, Label::Tampered);
        assert!(!session.poll());
    }

    #[test]
    fn test_submit_without_runtime_fails_file() {
        let predictor = Arc::new(CountingPredictor::default());
        let mut session = DetectionSession::new(predictor.clone());
        session.select_file(jpeg("a.jpg", 10));

        assert_eq!(session.submit(), SubmitOutcome::NoRuntime);
        assert!(matches!(session.error(), Some(DetectError::Client(_))));
        assert_eq!(session.active_request(), None);
        assert_eq!(predictor.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_task_panic_message_is_verbatim() {
        let mut session = DetectionSession::new(Arc::new(PanickingPredictor));
        session.select_file(jpeg("a.jpg", 10));
        session.submit_and_settle().await;

        let Some(DetectError::Client(message)) = session.error() else {
            panic!("expected a client error, got {:?}", session.state());
        };
        assert!(message.starts_with("task "));
        assert!(message.contains("panicked"));
    }

    #[tokio::test]
    async fn test_replaced_file_bytes_are_released() {
        let mut session = DetectionSession::new(Arc::new(CountingPredictor::default()));
        let first = jpeg("a.jpg", 64);
        let weak = Arc::downgrade(first.content());

        session.select_file(first);
        assert!(weak.upgrade().is_some());

        session.select_file(jpeg("b.jpg", 64));
        assert!(weak.upgrade().is_none());
    }

    fn client_for(server: &MockServer) -> Arc<VeriframeClient> {
        Arc::new(VeriframeClient::builder().base_url(server.uri()).build().unwrap())
    }

    #[tokio::test]
    async fn test_scenario_authentic_jpeg() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "prediction": "Authentic",
                "confidence": 0.94,
                "probabilities": {"authentic": 0.94, "tampered": 0.06},
                "raw_logits": {"class_0": 2.1, "class_1": -1.3}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut session = DetectionSession::new(client_for(&server));
        session.select_file(jpeg("photo.jpg", 2 * 1024 * 1024));
        session.submit_and_settle().await;

        let expected = PredictionResult {
            label: Label::Authentic,
            class_index: None,
            confidence: 0.94,
            probabilities: Probabilities {
                authentic: 0.94,
                tampered: 0.06,
            },
            raw_scores: RawScores {
                class0: 2.1,
                class1: -1.3,
            },
        };
        assert!(matches!(session.state(), SessionState::Succeeded(_, r) if *r == expected));
    }

    #[tokio::test]
    async fn test_scenario_pdf_never_reaches_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut session = DetectionSession::new(client_for(&server));
        let pdf = CandidateFile::new("doc.pdf", vec![0u8; 1024]).with_media_type("application/pdf");
        assert!(matches!(
            session.select_file(pdf),
            ValidationOutcome::Rejected(ValidationError::UnsupportedType { .. })
        ));
        assert!(matches!(session.submit(), SubmitOutcome::NoFileSelected));
    }

    #[tokio::test]
    async fn test_scenario_server_error_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "model unavailable"})))
            .mount(&server)
            .await;

        let mut session = DetectionSession::new(client_for(&server));
        session.select_file(jpeg("photo.jpg", 128));
        session.submit_and_settle().await;

        let err = session.error().unwrap();
        assert_eq!(err.to_string(), "model unavailable");
    }

    #[tokio::test]
    async fn test_double_submit_one_network_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({
                        "prediction": "Tampered",
                        "confidence": 0.8,
                        "probabilities": {"authentic": 0.2, "tampered": 0.8},
                        "raw_logits": {"class_0": -0.5, "class_1": 0.9}
                    }))
                    .set_delay(Duration::from_millis(100)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut session = DetectionSession::new(client_for(&server));
        session.select_file(jpeg("photo.jpg", 128));
        started(session.submit());
        assert_eq!(session.submit(), SubmitOutcome::AlreadySubmitting);
        session.settle().await;

        assert_eq!(session.result().unwrap().label, Label::Tampered);
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_scenario_timeout_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let client = VeriframeClient::builder()
            .base_url(server.uri())
            .predict_timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        let mut session = DetectionSession::new(Arc::new(client));
        session.select_file(jpeg("photo.jpg", 128));
        session.submit_and_settle().await;

        assert!(matches!(session.error(), Some(DetectError::Timeout(_))));
    }
}
