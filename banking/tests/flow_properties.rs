use banking::flow::FlowDefinition;
use banking::{
    Advance, FlowController, JointAccountField, JointAccountFields, JointAccountFlow, JointAccountStep,
    PaymentField, PaymentFlow, PaymentStep,
};
use std::sync::{Arc, Mutex};

type Captured<T> = Arc<Mutex<Vec<T>>>;

fn joint_flow() -> (FlowController<JointAccountFlow>, Captured<JointAccountFields>) {
    let calls: Captured<JointAccountFields> = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    let flow = FlowController::new(move |fields| sink.lock().unwrap().push(fields));
    (flow, calls)
}

#[cfg(test)]
mod joint_account_scenarios {
    use super::*;

    #[test]
    fn test_empty_email_blocks_first_step() {
        let (mut flow, calls) = joint_flow();

        let err = flow.advance().unwrap_err();
        assert_eq!(err.first_message(), "Please enter co-holder's email.");
        assert_eq!(flow.ordinal(), 1);
        assert_eq!(flow.current_step(), JointAccountStep::InviteCoholder);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_terms_required_at_terminal_step() {
        let (mut flow, calls) = joint_flow();
        flow.set_field(JointAccountField::CoholderEmail("jane@example.com".into()));

        for _ in 0..3 {
            flow.advance().unwrap();
        }
        assert_eq!(flow.ordinal(), 4);
        assert!(flow.is_terminal());

        let err = flow.advance().unwrap_err();
        assert_eq!(err.first_message(), "Please agree to the terms and conditions.");
        assert_eq!(flow.ordinal(), 4);
        assert!(!flow.is_completed());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_agreement_completes_exactly_once() {
        let (mut flow, calls) = joint_flow();
        flow.set_field(JointAccountField::CoholderEmail("jane@example.com".into()));
        for _ in 0..3 {
            flow.advance().unwrap();
        }
        flow.set_field(JointAccountField::TermsAgreed(true));

        assert_eq!(flow.advance().unwrap(), Advance::Completed);
        assert_eq!(flow.advance().unwrap(), Advance::AlreadyCompleted);

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            serde_json::to_value(&calls[0]).unwrap(),
            serde_json::json!({"coholderEmail": "jane@example.com", "termsAgreed": true})
        );
    }

    #[test]
    fn test_first_advance_announces_invitation() {
        let (mut flow, _) = joint_flow();
        flow.set_field(JointAccountField::CoholderEmail("jane@example.com".into()));

        match flow.advance().unwrap() {
            Advance::Moved { from, to, notice } => {
                assert_eq!(from, JointAccountStep::InviteCoholder);
                assert_eq!(to, JointAccountStep::Verification);
                let notice = notice.unwrap();
                assert_eq!(notice.title, "Invitation Sent");
                assert_eq!(notice.description, "Invitation sent to jane@example.com.");
            }
            other => panic!("unexpected advance result: {:?}", other),
        }

        match flow.advance().unwrap() {
            Advance::Moved { notice, .. } => assert!(notice.is_none()),
            other => panic!("unexpected advance result: {:?}", other),
        }
    }

    #[test]
    fn test_awaiting_step_has_no_way_back() {
        let (mut flow, _) = joint_flow();
        flow.set_field(JointAccountField::CoholderEmail("jane@example.com".into()));
        flow.advance().unwrap();
        flow.advance().unwrap();

        assert_eq!(flow.current_step(), JointAccountStep::AwaitingCoholder);
        assert_eq!(flow.retreat(), None);
        assert_eq!(flow.current_step(), JointAccountStep::AwaitingCoholder);

        flow.advance().unwrap();
        assert_eq!(flow.retreat(), Some(JointAccountStep::AwaitingCoholder));
    }
}

#[cfg(test)]
mod controller_properties {
    use super::*;

    #[test]
    fn test_failed_guard_never_moves_pointer() {
        let (mut flow, _) = joint_flow();
        for bad in ["", "   ", "jane", "jane@", "@example.com"] {
            flow.set_field(JointAccountField::CoholderEmail(bad.into()));
            assert!(flow.advance().is_err(), "email {:?} should be rejected", bad);
            assert_eq!(flow.ordinal(), 1);
        }
    }

    #[test]
    fn test_retreat_returns_to_previous_step_without_touching_fields() {
        let (mut flow, _) = joint_flow();
        flow.set_field(JointAccountField::CoholderEmail("jane@example.com".into()));
        flow.advance().unwrap();
        let before = flow.fields().clone();

        assert_eq!(flow.retreat(), Some(JointAccountStep::InviteCoholder));
        assert_eq!(flow.fields(), &before);

        // Step 4 -> 3 is allowed even though 3 itself is one-way.
        let mut flow = joint_flow().0;
        flow.set_field(JointAccountField::CoholderEmail("jane@example.com".into()));
        for _ in 0..3 {
            flow.advance().unwrap();
        }
        flow.set_field(JointAccountField::TermsAgreed(true));
        let before = flow.fields().clone();
        assert_eq!(flow.retreat(), Some(JointAccountStep::AwaitingCoholder));
        assert_eq!(flow.fields(), &before);
    }

    #[test]
    fn test_first_step_cannot_retreat() {
        let (mut flow, _) = joint_flow();
        assert_eq!(flow.retreat(), None);
        assert_eq!(flow.ordinal(), 1);
    }

    #[test]
    fn test_set_field_is_idempotent() {
        let (mut once, _) = joint_flow();
        let (mut twice, _) = joint_flow();

        once.set_field(JointAccountField::CoholderEmail("jane@example.com".into()));
        twice.set_field(JointAccountField::CoholderEmail("jane@example.com".into()));
        twice.set_field(JointAccountField::CoholderEmail("jane@example.com".into()));

        assert_eq!(once.fields(), twice.fields());
    }

    #[test]
    fn test_progress_is_ordinal_over_total() {
        let (mut flow, _) = joint_flow();
        assert_eq!(flow.total_steps(), JointAccountFlow::STEPS.len());
        assert_eq!(flow.progress(), 0.25);
        flow.set_field(JointAccountField::CoholderEmail("jane@example.com".into()));
        flow.advance().unwrap();
        assert_eq!(flow.progress(), 0.5);
    }
}

#[cfg(test)]
mod payment_scenarios {
    use super::*;
    use banking::PaymentFields;

    fn fill(flow: &mut FlowController<PaymentFlow>) {
        flow.set_field(PaymentField::SourceAccount("acc_checking_001".into()));
        flow.set_field(PaymentField::RecipientName("John Doe".into()));
        flow.set_field(PaymentField::RecipientAccount("000-123-456".into()));
        flow.set_field(PaymentField::Amount("42.10".into()));
        flow.set_field(PaymentField::PaymentDate("2024-07-20".into()));
    }

    #[test]
    fn test_review_then_cancel_keeps_input() {
        let mut flow = FlowController::<PaymentFlow>::new(|_| {});
        fill(&mut flow);
        flow.advance().unwrap();
        assert_eq!(flow.current_step(), PaymentStep::Review);

        assert_eq!(flow.retreat(), Some(PaymentStep::Details));
        assert_eq!(flow.fields().amount, "42.10");
    }

    #[test]
    fn test_confirm_hands_over_the_form() {
        let calls: Captured<PaymentFields> = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let mut flow = FlowController::<PaymentFlow>::new(move |fields| sink.lock().unwrap().push(fields));

        assert!(flow.advance().is_err());
        fill(&mut flow);
        flow.advance().unwrap();
        assert_eq!(flow.advance().unwrap(), Advance::Completed);

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let instruction = calls[0].parse().unwrap();
        assert_eq!(instruction.recipient_name, "John Doe");
        assert_eq!(instruction.amount.to_string(), "42.10");
    }
}
