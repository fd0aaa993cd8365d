//! Linear step flows.
//!
//! A flow is an ordered, fixed list of steps plus a typed record of form
//! fields. [`FlowController`] owns the current step pointer and the record,
//! gates `advance` on the active step's guard and hands the record to the
//! completion callback when the terminal step passes.

pub mod joint_account;
pub mod payment;

use crate::notify::Notification;
use crate::util::errors::ValidationError;
use std::fmt;
use tracing::{debug, info};

/// Static description of one step. Its ordinal is its position in
/// [`FlowDefinition::STEPS`], counted from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo<S: 'static> {
    pub step: S,
    pub title: &'static str,
    pub description: &'static str,
}

pub trait FlowDefinition {
    type Step: Copy + Eq + fmt::Debug + 'static;
    type Fields: Default + Clone + fmt::Debug;
    type Field: fmt::Debug;

    const NAME: &'static str;
    const STEPS: &'static [StepInfo<Self::Step>];

    /// Transition guard for `advance` out of `step`.
    fn guard(step: Self::Step, fields: &Self::Fields) -> Result<(), ValidationError>;

    /// Whether `retreat` is allowed out of `step`.
    fn reversible(_step: Self::Step) -> bool {
        true
    }

    fn apply(fields: &mut Self::Fields, field: Self::Field);

    /// Informational notice attached to a successful non-terminal advance.
    fn advance_notice(_from: Self::Step, _fields: &Self::Fields) -> Option<Notification> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance<S> {
    Moved {
        from: S,
        to: S,
        notice: Option<Notification>,
    },
    /// The terminal guard passed and the completion callback ran.
    Completed,
    /// The flow had already completed; nothing happened.
    AlreadyCompleted,
}

pub type CompletionCallback<T> = Box<dyn FnOnce(T) + Send>;

pub struct FlowController<F: FlowDefinition> {
    index: usize,
    fields: F::Fields,
    completed: bool,
    on_complete: Option<CompletionCallback<F::Fields>>,
}

impl<F: FlowDefinition> FlowController<F> {
    pub fn new(on_complete: impl FnOnce(F::Fields) + Send + 'static) -> Self {
        debug_assert!(!F::STEPS.is_empty(), "a flow needs at least one step");
        debug!(flow = F::NAME, "flow mounted");
        Self {
            index: 0,
            fields: F::Fields::default(),
            completed: false,
            on_complete: Some(Box::new(on_complete)),
        }
    }

    pub fn steps(&self) -> &'static [StepInfo<F::Step>] {
        F::STEPS
    }

    pub fn total_steps(&self) -> usize {
        F::STEPS.len()
    }

    pub fn current(&self) -> &'static StepInfo<F::Step> {
        &F::STEPS[self.index]
    }

    pub fn current_step(&self) -> F::Step {
        self.current().step
    }

    /// 1-based id of the current step.
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_terminal(&self) -> bool {
        self.index + 1 == F::STEPS.len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn fields(&self) -> &F::Fields {
        &self.fields
    }

    /// Fraction of the flow reached, `ordinal / total`.
    pub fn progress(&self) -> f32 {
        self.ordinal() as f32 / self.total_steps() as f32
    }

    /// Merges a field update. Validation is deferred to `advance`.
    pub fn set_field(&mut self, field: F::Field) {
        debug!(flow = F::NAME, ?field, "field updated");
        F::apply(&mut self.fields, field);
    }

    pub fn validate_current(&self) -> Result<(), ValidationError> {
        F::guard(self.current_step(), &self.fields)
    }

    pub fn can_retreat(&self) -> bool {
        !self.completed && self.index > 0 && F::reversible(self.current_step())
    }

    pub fn advance(&mut self) -> Result<Advance<F::Step>, ValidationError> {
        if self.completed {
            return Ok(Advance::AlreadyCompleted);
        }

        let from = self.current_step();
        if let Err(err) = F::guard(from, &self.fields) {
            debug!(flow = F::NAME, step = ?from, %err, "advance blocked");
            return Err(err);
        }

        if self.is_terminal() {
            self.completed = true;
            info!(flow = F::NAME, "flow completed");
            if let Some(callback) = self.on_complete.take() {
                callback(self.fields.clone());
            }
            return Ok(Advance::Completed);
        }

        let notice = F::advance_notice(from, &self.fields);
        self.index += 1;
        let to = self.current_step();
        info!(flow = F::NAME, ?from, ?to, "advanced");
        Ok(Advance::Moved { from, to, notice })
    }

    /// Moves back one step when allowed; returns the new step, or `None`
    /// when the current step blocks going back.
    pub fn retreat(&mut self) -> Option<F::Step> {
        if !self.can_retreat() {
            debug!(flow = F::NAME, step = ?self.current_step(), "retreat blocked");
            return None;
        }
        self.index -= 1;
        let to = self.current_step();
        info!(flow = F::NAME, ?to, "went back");
        Some(to)
    }
}

impl<F: FlowDefinition> fmt::Debug for FlowController<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowController")
            .field("flow", &F::NAME)
            .field("step", &self.current_step())
            .field("fields", &self.fields)
            .field("completed", &self.completed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Stage {
        One,
        Locked,
        Last,
    }

    #[derive(Debug, Clone, Default)]
    struct Counter {
        value: u32,
    }

    struct Toy;

    impl FlowDefinition for Toy {
        type Step = Stage;
        type Fields = Counter;
        type Field = u32;

        const NAME: &'static str = "toy";
        const STEPS: &'static [StepInfo<Stage>] = &[
            StepInfo { step: Stage::One, title: "One", description: "" },
            StepInfo { step: Stage::Locked, title: "Locked", description: "" },
            StepInfo { step: Stage::Last, title: "Last", description: "" },
        ];

        fn guard(step: Stage, fields: &Counter) -> Result<(), ValidationError> {
            match step {
                Stage::One if fields.value == 0 => Err(ValidationError::new("value required")),
                _ => Ok(()),
            }
        }

        fn reversible(step: Stage) -> bool {
            step != Stage::Locked
        }

        fn apply(fields: &mut Counter, field: u32) {
            fields.value = field;
        }
    }

    #[test]
    fn test_guard_blocks_and_state_is_unchanged() {
        let mut flow = FlowController::<Toy>::new(|_| {});
        assert!(flow.advance().is_err());
        assert_eq!(flow.current_step(), Stage::One);
        assert_eq!(flow.ordinal(), 1);
    }

    #[test]
    fn test_locked_step_cannot_go_back() {
        let mut flow = FlowController::<Toy>::new(|_| {});
        flow.set_field(3);
        flow.advance().unwrap();
        assert_eq!(flow.current_step(), Stage::Locked);
        assert!(!flow.can_retreat());
        assert_eq!(flow.retreat(), None);
        assert_eq!(flow.current_step(), Stage::Locked);
    }

    #[test]
    fn test_completion_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let mut flow = FlowController::<Toy>::new(move |fields: Counter| {
            assert_eq!(fields.value, 7);
            seen.fetch_add(1, Ordering::SeqCst);
        });
        flow.set_field(7);
        flow.advance().unwrap();
        flow.advance().unwrap();
        assert_eq!(flow.advance().unwrap(), Advance::Completed);
        assert_eq!(flow.advance().unwrap(), Advance::AlreadyCompleted);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(flow.is_completed());
        assert_eq!(flow.retreat(), None);
    }

    #[test]
    fn test_progress_tracks_ordinal() {
        let mut flow = FlowController::<Toy>::new(|_| {});
        assert!((flow.progress() - 1.0 / 3.0).abs() < f32::EPSILON);
        flow.set_field(1);
        flow.advance().unwrap();
        assert!((flow.progress() - 2.0 / 3.0).abs() < f32::EPSILON);
    }
}
