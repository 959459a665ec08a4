use tabprep::{JobStatus, JobUpdate, ScaleRequest, ScaleResponse, ScalingMethod};

#[test]
fn test_scale_request_from_minmax() {
    let method = ScalingMethod::MinMax {
        feature_range: (0.0, 1.0),
        clip: true,
    };
    let request = ScaleRequest::new("ds-42", &method, vec!["age".to_string()]);

    assert_eq!(request.method, "minmax");
    assert_eq!(request.feature_range, Some((0.0, 1.0)));
    assert_eq!(request.clip, Some(true));
    assert_eq!(request.with_mean, None);
    assert_eq!(request.with_std, None);

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"dataset_id\":\"ds-42\""));
    assert!(json.contains("\"feature_range\":[0.0,1.0]"));
    // fields for other methods stay off the wire
    assert!(!json.contains("with_mean"));
}

#[test]
fn test_scale_request_from_standard() {
    let request = ScaleRequest::new(
        "ds-1",
        &ScalingMethod::standard(),
        vec!["a".to_string(), "b".to_string()],
    );

    assert_eq!(request.method, "standard");
    assert_eq!(request.with_mean, Some(true));
    assert_eq!(request.with_std, Some(true));
    assert_eq!(request.feature_range, None);
}

#[test]
fn test_scale_request_from_rowwise_methods() {
    for method in [ScalingMethod::MaxAbs, ScalingMethod::L1, ScalingMethod::L2] {
        let request = ScaleRequest::new("ds-1", &method, vec!["a".to_string()]);
        assert_eq!(request.method, method.identifier());
        assert_eq!(request.feature_range, None);
        assert_eq!(request.with_mean, None);
        assert_eq!(request.clip, None);
    }
}

#[test]
fn test_scale_response_without_preview() {
    let json = r#"{"dataset_id":"ds-43","columns":["age","age_minmax"]}"#;
    let response: ScaleResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.dataset_id, "ds-43");
    assert_eq!(response.columns, vec!["age", "age_minmax"]);
    assert!(response.preview.is_none());
}

#[test]
fn test_job_status_wire_names() {
    assert_eq!(serde_json::to_string(&JobStatus::Queued).unwrap(), "\"queued\"");
    let status: JobStatus = serde_json::from_str("\"completed\"").unwrap();
    assert_eq!(status, JobStatus::Completed);

    assert!(!JobStatus::Queued.is_terminal());
    assert!(!JobStatus::Running.is_terminal());
    assert!(JobStatus::Completed.is_terminal());
    assert!(JobStatus::Failed.is_terminal());
}

#[test]
fn test_job_update_with_optional_fields_absent() {
    let json = r#"{"job_id":"j-7","status":"running"}"#;
    let update: JobUpdate = serde_json::from_str(json).unwrap();
    assert_eq!(update.job_id, "j-7");
    assert_eq!(update.status, JobStatus::Running);
    assert!(update.progress.is_none());
    assert!(update.result_dataset_id.is_none());
}

#[test]
fn test_job_update_round_trip() {
    let update = JobUpdate {
        job_id: "j-9".to_string(),
        status: JobStatus::Completed,
        progress: Some(1.0),
        message: None,
        result_dataset_id: Some("ds-99".to_string()),
    };
    let json = serde_json::to_string(&update).unwrap();
    let back: JobUpdate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, update);
}
