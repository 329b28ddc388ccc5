use super::*;

#[test]
fn rejected_maps_to_retry_alert() {
    let err = SubmitError::Rejected { status: 400 };
    assert_eq!(err.alert_message(), "Failed to create turf. Please try again.");
    assert_eq!(err.to_string(), "create turf rejected: 400");
}

#[test]
fn transport_maps_to_generic_alert() {
    let err = SubmitError::Transport("network down".to_owned());
    assert_eq!(err.alert_message(), "An error occurred while creating the turf.");
    assert_eq!(err.to_string(), "create turf transport error: network down");
}

#[test]
fn server_errors_share_the_rejected_alert() {
    for status in [302, 403, 404, 500, 503] {
        assert_eq!(SubmitError::Rejected { status }.alert_message(), REJECTED_ALERT);
    }
}

#[test]
fn log_is_callable_without_a_logger() {
    SubmitError::Rejected { status: 500 }.log();
    SubmitError::Transport("x".to_owned()).log();
}
