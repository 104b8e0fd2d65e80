use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::controllers::coordinator::errors::GenerationError;
use crate::controllers::coordinator::events::{GenerationEvent, GenerationFailure, PointsData};
use crate::controllers::coordinator::ports::presenter::GenerationPresenterPort;
use crate::controllers::protocol::errors::ProtocolError;
use crate::controllers::protocol::request::{GenerationRequest, decode_request};
use crate::core::actions::cancellation::Cancelled;
use crate::core::fractals::mandelbulb::params::GenerationParams;
use crate::core::fractals::mandelbulb::sampler::generate_cancelable;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordinatorState {
    Idle,
    Dispatched { generation: u64 },
}

enum JobPayload {
    Generate(GenerationParams),
    Malformed(ProtocolError),
}

struct Job {
    generation: u64,
    payload: JobPayload,
    cancelled: bool,
}

#[derive(Default)]
struct Queue {
    pending: VecDeque<Job>,
    dispatched: Option<u64>,
}

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    queue: Mutex<Queue>,
    wake: Condvar,
    cancel_in_flight: AtomicBool,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn GenerationPresenterPort>,
}

impl SharedState {
    fn lock_queue(&self) -> MutexGuard<'_, Queue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Runs generation requests one at a time on a dedicated worker thread.
///
/// Submissions are queued in order and each one is answered with exactly one
/// [`GenerationEvent`] through the presenter port, in submission order. The
/// returned `u64` is the request's generation id.
pub struct GenerationCoordinator {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl GenerationCoordinator {
    pub fn new(presenter_port: Arc<dyn GenerationPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            queue: Mutex::new(Queue::default()),
            wake: Condvar::new(),
            cancel_in_flight: AtomicBool::new(false),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("mandelbulb-generator".to_string())
            .spawn(move || {
                Self::worker_loop(&worker_shared);
            });

        let worker = match worker {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!("failed to spawn generation worker: {err}");
                shared.shutdown.store(true, Ordering::Release);
                None
            }
        };

        Self { shared, worker }
    }

    pub fn submit(&self, params: GenerationParams) -> u64 {
        self.enqueue(JobPayload::Generate(params))
    }

    pub fn submit_request(&self, request: GenerationRequest) -> u64 {
        match request {
            GenerationRequest::GeneratePoints(params) => self.submit(params),
        }
    }

    /// Decodes a raw wire message and submits it. A message that fails to decode
    /// still gets a generation id and is answered with a failure in turn.
    pub fn submit_message(&self, message: &str) -> u64 {
        match decode_request(message) {
            Ok(request) => self.submit_request(request),
            Err(err) => self.enqueue(JobPayload::Malformed(err)),
        }
    }

    /// Returns `true` if `generation` was queued or in flight, in which case it is
    /// answered with [`GenerationError::Cancelled`]. Returns `false` once it has been
    /// answered or if it was never submitted.
    pub fn cancel(&self, generation: u64) -> bool {
        let mut queue = self.shared.lock_queue();

        if let Some(job) = queue
            .pending
            .iter_mut()
            .find(|job| job.generation == generation)
        {
            job.cancelled = true;
            return true;
        }

        if queue.dispatched == Some(generation) {
            self.shared.cancel_in_flight.store(true, Ordering::Release);
            return true;
        }

        false
    }

    #[must_use]
    pub fn state(&self) -> CoordinatorState {
        match self.shared.lock_queue().dispatched {
            Some(generation) => CoordinatorState::Dispatched { generation },
            None => CoordinatorState::Idle,
        }
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.shared.lock_queue().pending.len()
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    /// Cancels the in-flight request, fails everything still queued and joins the
    /// worker.
    pub fn shutdown(&mut self) {
        {
            // Held so the flag cannot land between the worker's check and its wait.
            let _queue = self.shared.lock_queue();
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("generation worker panicked");
            }
        }
    }

    fn enqueue(&self, payload: JobPayload) -> u64 {
        let generation = {
            let mut queue = self.shared.lock_queue();
            let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

            if self.shared.shutdown.load(Ordering::Acquire) {
                drop(queue);
                Self::complete(
                    &self.shared,
                    generation,
                    Self::failure(generation, GenerationError::ShutDown),
                );
                return generation;
            }

            queue.pending.push_back(Job {
                generation,
                payload,
                cancelled: false,
            });

            generation
        };

        debug!(generation, "queued generation request");
        self.shared.wake.notify_one();

        generation
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let job = {
                let mut queue = shared.lock_queue();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        let abandoned: Vec<Job> = queue.pending.drain(..).collect();
                        drop(queue);

                        for job in abandoned {
                            Self::complete(
                                shared,
                                job.generation,
                                Self::failure(job.generation, GenerationError::ShutDown),
                            );
                        }
                        return;
                    }

                    if let Some(job) = queue.pending.pop_front() {
                        queue.dispatched = Some(job.generation);
                        shared.cancel_in_flight.store(false, Ordering::Release);
                        break job;
                    }

                    queue = shared
                        .wake
                        .wait(queue)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let generation = job.generation;
            debug!(generation, "dispatched generation request");

            let event = Self::run_job(shared, job);
            Self::complete(shared, generation, event);
        }
    }

    fn run_job(shared: &SharedState, job: Job) -> GenerationEvent {
        let generation = job.generation;

        if job.cancelled {
            return Self::failure(generation, GenerationError::Cancelled);
        }

        let params = match job.payload {
            JobPayload::Generate(params) => params,
            JobPayload::Malformed(err) => {
                return Self::failure(generation, GenerationError::Malformed(err));
            }
        };

        let cancel_token = || {
            shared.shutdown.load(Ordering::Relaxed)
                || shared.cancel_in_flight.load(Ordering::Relaxed)
        };

        let start = Instant::now();

        match generate_cancelable(&params, &cancel_token) {
            Ok(points) => {
                let duration = start.elapsed();

                info!(
                    generation,
                    dimension = params.dimension(),
                    power = params.power(),
                    max_iterations = params.max_iterations(),
                    points = points.point_count(),
                    ?duration,
                    "generated point cloud"
                );

                GenerationEvent::Completed(PointsData {
                    generation,
                    points,
                    duration,
                })
            }
            Err(Cancelled) if shared.shutdown.load(Ordering::Acquire) => {
                Self::failure(generation, GenerationError::ShutDown)
            }
            Err(Cancelled) => Self::failure(generation, GenerationError::Cancelled),
        }
    }

    fn failure(generation: u64, error: GenerationError) -> GenerationEvent {
        warn!(generation, %error, "generation request failed");

        GenerationEvent::Failed(GenerationFailure { generation, error })
    }

    fn complete(shared: &SharedState, generation: u64, event: GenerationEvent) {
        let event = {
            let mut queue = shared.lock_queue();
            if queue.dispatched == Some(generation) {
                queue.dispatched = None;

                // A cancel that landed after the last column poll still wins.
                match event {
                    GenerationEvent::Completed(_)
                        if shared.cancel_in_flight.load(Ordering::Acquire) =>
                    {
                        Self::failure(generation, GenerationError::Cancelled)
                    }
                    event => event,
                }
            } else {
                event
            }
        };

        shared
            .last_completed_generation
            .fetch_max(generation, Ordering::AcqRel);

        shared.presenter_port.present(event);
    }
}

impl Drop for GenerationCoordinator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbulb::sampler::generate;
    use crate::presenters::channel::ChannelPresenter;
    use std::sync::mpsc::Receiver;
    use std::time::Duration;

    const EVENT_TIMEOUT: Duration = Duration::from_secs(30);

    fn coordinator() -> (GenerationCoordinator, Receiver<GenerationEvent>) {
        let (presenter, events) = ChannelPresenter::new();
        let coordinator =
            GenerationCoordinator::new(Arc::new(presenter) as Arc<dyn GenerationPresenterPort>);

        (coordinator, events)
    }

    fn params(dimension: u32, power: f64, max_iterations: u32) -> GenerationParams {
        GenerationParams::new(dimension, power, max_iterations).unwrap()
    }

    /// Large enough that it is still running when the test acts on it.
    fn slow_params() -> GenerationParams {
        params(512, 8.0, 256)
    }

    fn wait_until_dispatched(coordinator: &GenerationCoordinator, generation: u64) {
        let start = Instant::now();
        while coordinator.state() != (CoordinatorState::Dispatched { generation }) {
            assert!(
                start.elapsed() < EVENT_TIMEOUT,
                "request {generation} was never dispatched"
            );
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_submit_emits_completed_points() {
        let (mut coordinator, events) = coordinator();
        let p = params(16, 8.0, 20);

        let generation = coordinator.submit(p);
        let event = events.recv_timeout(EVENT_TIMEOUT).unwrap();

        match event {
            GenerationEvent::Completed(data) => {
                assert_eq!(data.generation, generation);
                assert!(!data.points.is_empty());
                assert_eq!(data.points, generate(&p));
            }
            GenerationEvent::Failed(failure) => panic!("unexpected failure: {}", failure.error),
        }

        coordinator.shutdown();
    }

    #[test]
    fn test_malformed_message_yields_only_failed() {
        let (mut coordinator, events) = coordinator();

        let generation = coordinator.submit_message(
            r#"{"kind":"DRAW_POINTS","params":{"dimension":16,"power":8,"maxIterations":20}}"#,
        );
        let event = events.recv_timeout(EVENT_TIMEOUT).unwrap();

        assert_eq!(event.generation(), generation);
        assert!(matches!(
            &event,
            GenerationEvent::Failed(GenerationFailure {
                error: GenerationError::Malformed(ProtocolError::UnrecognizedKind(_)),
                ..
            })
        ));
        assert_eq!(
            event.into_response(),
            crate::controllers::protocol::response::GenerationResponse::Failed
        );
        assert!(events.recv_timeout(Duration::from_millis(100)).is_err());

        coordinator.shutdown();
    }

    #[test]
    fn test_valid_message_is_generated() {
        let (mut coordinator, events) = coordinator();

        let generation = coordinator.submit_message(
            r#"{"kind":"GENERATE_POINTS","params":{"dimension":8,"power":8,"maxIterations":10}}"#,
        );
        let event = events.recv_timeout(EVENT_TIMEOUT).unwrap();

        match event {
            GenerationEvent::Completed(data) => {
                assert_eq!(data.generation, generation);
                assert_eq!(data.points.point_count(), 44);
            }
            GenerationEvent::Failed(failure) => panic!("unexpected failure: {}", failure.error),
        }

        coordinator.shutdown();
    }

    #[test]
    fn test_generation_ids_increment() {
        let (mut coordinator, events) = coordinator();

        let first = coordinator.submit(params(4, 8.0, 10));
        let second = coordinator.submit(params(4, 8.0, 10));

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(events.recv_timeout(EVENT_TIMEOUT).unwrap().generation(), first);
        assert_eq!(events.recv_timeout(EVENT_TIMEOUT).unwrap().generation(), second);

        coordinator.shutdown();
    }

    #[test]
    fn test_every_submission_is_answered_once_in_order() {
        let (mut coordinator, events) = coordinator();

        let submitted = vec![
            coordinator.submit(params(8, 8.0, 10)),
            coordinator.submit_message("not json"),
            coordinator.submit(params(6, 4.0, 12)),
            coordinator.submit_message(r#"{"kind":"GENERATE_POINTS"}"#),
            coordinator.submit(params(4, 2.0, 10)),
        ];

        let received: Vec<u64> = (0..submitted.len())
            .map(|_| events.recv_timeout(EVENT_TIMEOUT).unwrap().generation())
            .collect();

        assert_eq!(received, submitted);
        assert!(events.recv_timeout(Duration::from_millis(100)).is_err());

        coordinator.shutdown();
    }

    #[test]
    fn test_consecutive_requests_do_not_contaminate_each_other() {
        let (mut coordinator, events) = coordinator();
        let large = params(64, 8.0, 20);
        let small = params(32, 8.0, 20);

        coordinator.submit(large);
        coordinator.submit(small);

        let mut results = Vec::new();
        for _ in 0..2 {
            match events.recv_timeout(EVENT_TIMEOUT).unwrap() {
                GenerationEvent::Completed(data) => results.push(data.points),
                GenerationEvent::Failed(failure) => panic!("unexpected failure: {}", failure.error),
            }
        }

        assert_eq!(results[0], generate(&large));
        assert_eq!(results[1], generate(&small));

        coordinator.shutdown();
    }

    #[test]
    fn test_cancel_in_flight_and_queued_requests() {
        let (mut coordinator, events) = coordinator();

        let slow = coordinator.submit(slow_params());
        let queued = coordinator.submit(params(8, 8.0, 10));
        wait_until_dispatched(&coordinator, slow);

        assert!(coordinator.cancel(queued));
        assert!(coordinator.cancel(slow));

        for expected in [slow, queued] {
            let event = events.recv_timeout(EVENT_TIMEOUT).unwrap();
            assert_eq!(event.generation(), expected);
            assert!(matches!(
                event,
                GenerationEvent::Failed(GenerationFailure {
                    error: GenerationError::Cancelled,
                    ..
                })
            ));
        }

        coordinator.shutdown();
    }

    #[test]
    fn test_request_after_cancelled_one_still_completes() {
        let (mut coordinator, events) = coordinator();

        let slow = coordinator.submit(slow_params());
        let next = coordinator.submit(params(4, 8.0, 10));
        wait_until_dispatched(&coordinator, slow);
        coordinator.cancel(slow);

        assert!(matches!(
            events.recv_timeout(EVENT_TIMEOUT).unwrap(),
            GenerationEvent::Failed(_)
        ));
        match events.recv_timeout(EVENT_TIMEOUT).unwrap() {
            GenerationEvent::Completed(data) => {
                assert_eq!(data.generation, next);
                assert_eq!(data.points.point_count(), 9);
            }
            GenerationEvent::Failed(failure) => panic!("unexpected failure: {}", failure.error),
        }

        coordinator.shutdown();
    }

    #[test]
    fn test_accepted_cancel_always_yields_cancelled() {
        let (mut coordinator, events) = coordinator();

        // Small jobs so the cancel lands at varying points, including after the sweep.
        for spin in 0..40_u64 {
            let generation = coordinator.submit(params(12, 8.0, 12));
            thread::sleep(Duration::from_micros(spin * 25));
            let accepted = coordinator.cancel(generation);

            let event = events.recv_timeout(EVENT_TIMEOUT).unwrap();
            assert_eq!(event.generation(), generation);

            match event {
                GenerationEvent::Failed(GenerationFailure {
                    error: GenerationError::Cancelled,
                    ..
                }) => assert!(accepted, "cancelled without an accepted cancel"),
                GenerationEvent::Completed(_) => {
                    assert!(!accepted, "completed after cancel returned true")
                }
                GenerationEvent::Failed(failure) => panic!("unexpected failure: {}", failure.error),
            }
        }

        coordinator.shutdown();
    }

    #[test]
    fn test_cancel_unknown_generation_returns_false() {
        let (mut coordinator, events) = coordinator();

        assert!(!coordinator.cancel(42));

        let generation = coordinator.submit(params(4, 8.0, 10));
        events.recv_timeout(EVENT_TIMEOUT).unwrap();

        assert!(!coordinator.cancel(generation));

        coordinator.shutdown();
    }

    #[test]
    fn test_state_transitions() {
        let (mut coordinator, events) = coordinator();

        assert_eq!(coordinator.state(), CoordinatorState::Idle);

        let slow = coordinator.submit(slow_params());
        wait_until_dispatched(&coordinator, slow);
        assert_eq!(coordinator.pending_count(), 0);

        coordinator.cancel(slow);
        events.recv_timeout(EVENT_TIMEOUT).unwrap();

        assert_eq!(coordinator.state(), CoordinatorState::Idle);

        coordinator.shutdown();
    }

    #[test]
    fn test_last_completed_generation_starts_at_zero() {
        let (mut coordinator, _events) = coordinator();

        assert_eq!(coordinator.last_completed_generation(), 0);

        coordinator.shutdown();
    }

    #[test]
    fn test_last_completed_generation_tracks_completions_and_failures() {
        let (mut coordinator, events) = coordinator();

        let completed = coordinator.submit(params(4, 8.0, 10));
        events.recv_timeout(EVENT_TIMEOUT).unwrap();
        assert_eq!(coordinator.last_completed_generation(), completed);

        let failed = coordinator.submit_message("{}");
        events.recv_timeout(EVENT_TIMEOUT).unwrap();
        assert_eq!(coordinator.last_completed_generation(), failed);

        coordinator.shutdown();
    }

    #[test]
    fn test_shutdown_fails_in_flight_and_pending_requests() {
        let (mut coordinator, events) = coordinator();

        let slow = coordinator.submit(slow_params());
        let pending = [
            coordinator.submit(params(4, 8.0, 10)),
            coordinator.submit(params(4, 8.0, 10)),
        ];
        wait_until_dispatched(&coordinator, slow);

        coordinator.shutdown();

        let received: Vec<GenerationEvent> = events.try_iter().collect();
        let generations: Vec<u64> = received.iter().map(GenerationEvent::generation).collect();

        assert_eq!(generations, vec![slow, pending[0], pending[1]]);
        assert!(received.iter().all(|event| matches!(
            event,
            GenerationEvent::Failed(GenerationFailure {
                error: GenerationError::ShutDown,
                ..
            })
        )));
    }

    #[test]
    fn test_submit_after_shutdown_fails_immediately() {
        let (mut coordinator, events) = coordinator();
        coordinator.shutdown();

        let generation = coordinator.submit(params(4, 8.0, 10));

        let event = events.recv_timeout(EVENT_TIMEOUT).unwrap();
        assert_eq!(event.generation(), generation);
        assert!(matches!(
            event,
            GenerationEvent::Failed(GenerationFailure {
                error: GenerationError::ShutDown,
                ..
            })
        ));
    }
}
