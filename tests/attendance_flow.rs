//! RSVP consistency tests against the stub backend: the locally maintained
//! registered counter must equal the server's count after every acknowledged
//! mutation, including waitlist overrides on full events.

mod support;

use piarapp::auth::AuthClient;
use piarapp::events::{
    AttendanceCoordinator, AttendanceStatus, EventsClient, RsvpAction,
};

use support::{harness, Harness, Stub, PASSWORD};

async fn logged_in(stub: support::Shared) -> Harness {
    let h = harness(stub).await;
    AuthClient::new(h.api.clone())
        .login("ana@club.org", PASSWORD)
        .await
        .expect("login");
    h
}

async fn coordinator(h: &Harness) -> AttendanceCoordinator {
    let client = EventsClient::new(h.api.clone());
    let event = client.get(1, 5).await.expect("event");
    AttendanceCoordinator::load(client, &event)
        .await
        .expect("coordinator")
}

fn server_count(h: &Harness) -> u32 {
    h.stub.lock().expect("stub lock").registered_count()
}

#[tokio::test]
async fn register_with_space_increments_to_match_server() {
    let stub = Stub::new();
    {
        let mut s = stub.lock().expect("stub lock");
        s.capacity = Some(10);
        s.others_registered = 3;
    }
    let h = logged_in(stub).await;
    let mut rsvp = coordinator(&h).await;

    assert_eq!(rsvp.status(), AttendanceStatus::Cancelled);
    assert_eq!(rsvp.registered_count(), 3);

    let result = rsvp.set_status(RsvpAction::Register).await.expect("rsvp");
    assert_eq!(result, AttendanceStatus::Registered);
    assert_eq!(rsvp.registered_count(), 4);
    assert_eq!(rsvp.registered_count(), server_count(&h));
}

#[tokio::test]
async fn register_when_full_waitlists_without_counting() {
    let stub = Stub::new();
    {
        let mut s = stub.lock().expect("stub lock");
        s.capacity = Some(2);
        s.others_registered = 2;
    }
    let h = logged_in(stub).await;
    let mut rsvp = coordinator(&h).await;

    assert!(rsvp.is_full());
    let result = rsvp.set_status(RsvpAction::Register).await.expect("rsvp");

    assert_eq!(result, AttendanceStatus::Waitlisted);
    assert_eq!(rsvp.status(), AttendanceStatus::Waitlisted);
    assert_eq!(rsvp.registered_count(), 2, "waitlist must not bump the count");
    assert_eq!(rsvp.registered_count(), server_count(&h));
}

#[tokio::test]
async fn cancel_without_prior_record_is_a_noop() {
    let h = logged_in(Stub::new()).await;
    let mut rsvp = coordinator(&h).await;

    assert_eq!(rsvp.status(), AttendanceStatus::Cancelled);
    let before = rsvp.registered_count();

    let result = rsvp.set_status(RsvpAction::Cancel).await.expect("no error");
    assert_eq!(result, AttendanceStatus::Cancelled);
    assert_eq!(rsvp.status(), AttendanceStatus::Cancelled);
    assert_eq!(rsvp.registered_count(), before);
    assert_eq!(rsvp.registered_count(), server_count(&h));
}

#[tokio::test]
async fn cancel_after_register_decrements_back() {
    let stub = Stub::new();
    {
        let mut s = stub.lock().expect("stub lock");
        s.others_registered = 5;
    }
    let h = logged_in(stub).await;
    let mut rsvp = coordinator(&h).await;

    rsvp.set_status(RsvpAction::Register).await.expect("register");
    assert_eq!(rsvp.registered_count(), 6);

    rsvp.set_status(RsvpAction::Cancel).await.expect("cancel");
    assert_eq!(rsvp.status(), AttendanceStatus::Cancelled);
    assert_eq!(rsvp.registered_count(), 5);
    assert_eq!(rsvp.registered_count(), server_count(&h));
}

#[tokio::test]
async fn repeated_registration_never_double_counts() {
    let h = logged_in(Stub::new()).await;
    let mut rsvp = coordinator(&h).await;

    rsvp.set_status(RsvpAction::Register).await.expect("first");
    rsvp.set_status(RsvpAction::Register).await.expect("second");
    rsvp.set_status(RsvpAction::Register).await.expect("third");

    assert_eq!(rsvp.registered_count(), 1);
    assert_eq!(rsvp.registered_count(), server_count(&h));
}

#[tokio::test]
async fn any_action_sequence_keeps_count_in_step_with_server() {
    let stub = Stub::new();
    {
        let mut s = stub.lock().expect("stub lock");
        s.capacity = Some(4);
        s.others_registered = 3;
    }
    let h = logged_in(stub).await;
    let mut rsvp = coordinator(&h).await;

    use RsvpAction::{Cancel, Register};
    let script = [
        Register, Register, Cancel, Cancel, Register, Cancel, Register, Register, Cancel,
    ];

    for (step, action) in script.into_iter().enumerate() {
        rsvp.set_status(action).await.expect("action settles");
        assert_eq!(
            rsvp.registered_count(),
            server_count(&h),
            "count diverged after step {}",
            step
        );
    }
}

#[tokio::test]
async fn loading_reflects_existing_registration() {
    let stub = Stub::new();
    {
        let mut s = stub.lock().expect("stub lock");
        s.others_registered = 1;
        s.my_status = Some("inscrito".to_string());
    }
    let h = logged_in(stub).await;
    let rsvp = coordinator(&h).await;

    assert_eq!(rsvp.status(), AttendanceStatus::Registered);
    assert_eq!(rsvp.registered_count(), 2);
}

#[tokio::test]
async fn loading_treats_cancelled_record_as_absent() {
    let stub = Stub::new();
    {
        let mut s = stub.lock().expect("stub lock");
        s.my_status = Some("cancelado".to_string());
    }
    let h = logged_in(stub).await;
    let rsvp = coordinator(&h).await;

    assert_eq!(rsvp.status(), AttendanceStatus::Cancelled);
}
