use error_trail::{
    enrich, enrich_wrap_error, is, kv, new, newf, unwrap, wrap, wrap_error, wrapf, Error, Value,
};

#[test]
fn new_keeps_message_verbatim() {
    for message in ["failed", "", "with: colon", "multi\nline"] {
        assert_eq!(new(message).to_string(), message);
    }
}

#[test]
fn newf_formats_message() {
    let err = newf!("oops: {}", "failed");
    assert_eq!(err.to_string(), "oops: failed");
    assert!(is(&err, &new("oops: failed")));
}

#[test]
fn wrap_prefixes_message() {
    let err = wrap(new("failed"), "oops").unwrap();
    assert_eq!(err.to_string(), "oops: failed");
}

#[test]
fn wrap_absent_error_is_absent() {
    assert_eq!(wrap(None::<Error>, "oops"), None);
}

#[test]
fn wrap_unwraps_to_same_handle() {
    let failed = new("failed");
    let err = wrap(failed.clone(), "oops").unwrap();

    let inner = unwrap(&err).unwrap();
    assert!(inner.ptr_eq(&failed));
}

#[test]
fn wrapf_formats_prefix() {
    let err = wrapf!(new("failed"), "oops id {}", 5).unwrap();
    assert_eq!(err.to_string(), "oops id 5: failed");
    assert_eq!(unwrap(&err).unwrap().to_string(), "failed");
}

#[test]
fn wrapf_absent_error_is_absent() {
    assert_eq!(wrapf!(None::<Error>, "oops id {}", 5), None);
}

#[test]
fn wrap_error_renders_supplied_then_cause() {
    let err = wrap_error(new("failed"), new("oops")).unwrap();
    assert_eq!(err.to_string(), "oops: failed");
}

#[test]
fn wrap_error_without_cause_returns_supplied() {
    let sentinel = new("oops");
    let err = wrap_error(None::<Error>, sentinel.clone()).unwrap();

    assert_eq!(err.to_string(), "oops");
    assert!(err.ptr_eq(&sentinel));
}

#[test]
fn wrap_error_without_supplied_returns_err() {
    let failed = new("oops");
    let err = wrap_error(failed.clone(), None::<Error>).unwrap();

    assert_eq!(err.to_string(), "oops");
    assert!(err.ptr_eq(&failed));
}

#[test]
fn wrap_error_both_absent_is_absent() {
    assert_eq!(wrap_error(None::<Error>, None::<Error>), None);
}

#[test]
fn enrich_keeps_message_and_records_pairs() {
    let err = enrich!(new("failed"), "id", 5).unwrap();

    assert_eq!(err.to_string(), "failed");
    let enriched = err.as_enriched().expect("enriched node");
    assert_eq!(enriched.tuples(), kv!["id", 5]);
}

#[test]
fn enrich_odd_list_returns_input_unchanged() {
    let failed = new("failed");
    let err = enrich!(failed.clone(), "id", "5", 5).unwrap();

    assert_eq!(err.to_string(), "failed");
    assert!(err.ptr_eq(&failed));
    assert!(err.as_enriched().is_none());
}

#[test]
fn enrich_single_key_is_declined() {
    let failed = new("failed");
    let err = enrich(failed.clone(), [Value::from("k")]).unwrap();
    assert!(err.ptr_eq(&failed));
}

#[test]
fn enrich_absent_error_is_absent() {
    assert_eq!(enrich!(None::<Error>, "id", 5), None);
}

#[test]
fn enrich_empty_list_still_builds_node() {
    let err = enrich!(new("failed")).unwrap();
    let enriched = err.as_enriched().expect("enriched node");
    assert!(enriched.tuples().is_empty());
}

#[test]
fn enrich_wrap_error_composes_cause_wrap_and_enrichment() {
    let failed = new("failed");
    let oops = new("oops");

    let err = enrich_wrap_error!(failed.clone(), oops.clone(), "id", 5).unwrap();

    assert_eq!(err.to_string(), "oops: failed");
    assert!(is(&err, &oops));
    assert!(is(&err, &failed));
    assert_eq!(err.as_enriched().unwrap().tuples(), kv!["id", 5]);
}

#[test]
fn enrich_wrap_error_with_absent_cause_enriches_supplied() {
    let oops = new("oops");
    let err = enrich_wrap_error!(None::<Error>, oops.clone(), "id", 5).unwrap();

    assert_eq!(err.to_string(), "oops");
    assert!(unwrap(&err).unwrap().ptr_eq(&oops));
}

#[test]
fn enrich_wrap_error_both_absent_is_absent() {
    assert_eq!(enrich_wrap_error!(None::<Error>, None::<Error>, "id", 5), None);
}
