use error_trail::{
    cause, enrich, enrich_wrap_error, fields, is, kv, new, newf, tuples, unwrap, wrap, wrap_error,
    wrapf, Error, Value, MALFORMED_FIELDS,
};
use std::fmt;

#[derive(Debug)]
struct Canceled;

impl fmt::Display for Canceled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("context canceled")
    }
}

impl std::error::Error for Canceled {}

#[test]
fn unwrap_message_wrap() {
    let err = wrap(new("failed"), "oops").unwrap();
    assert_eq!(unwrap(&err).unwrap().to_string(), "failed");
}

#[test]
fn unwrap_cause_wrap_returns_supplied() {
    let err = wrap_error(new("failed"), new("oops")).unwrap();
    assert_eq!(unwrap(&err).unwrap().to_string(), "oops");
}

#[test]
fn unwrap_enriched_returns_inner() {
    let err = enrich!(new("failed"), "id", 5).unwrap();
    assert_eq!(unwrap(&err).unwrap().to_string(), "failed");
}

#[test]
fn unwrap_enriched_cause_wrap_walks_both_layers() {
    let err = enrich_wrap_error!(new("failed"), new("oops"), "id", 5).unwrap();

    let cause_wrap = unwrap(&err).unwrap();
    assert_eq!(cause_wrap.to_string(), "oops: failed");

    let supplied = unwrap(cause_wrap).unwrap();
    assert_eq!(supplied.to_string(), "oops");
    assert!(unwrap(supplied).is_none());
}

#[test]
fn unwrap_plain_is_absent() {
    assert!(unwrap(&new("failed")).is_none());
}

#[test]
fn cause_of_cause_wrap() {
    let failed = new("failed");
    let err = wrap_error(failed.clone(), new("oops")).unwrap();
    assert_eq!(cause(&err), Some(&failed));
}

#[test]
fn cause_is_absent_for_other_nodes() {
    let failed = new("failed");
    assert!(cause(&failed).is_none());
    assert!(cause(&wrap(failed.clone(), "oops").unwrap()).is_none());
    assert!(cause(&enrich!(failed, "id", 5).unwrap()).is_none());
}

#[test]
fn is_plain_compares_messages() {
    assert!(is(&new("failed"), &new("failed")));
    assert!(is(&newf!("oops: {}", "failed"), &new("oops: failed")));
    assert!(!is(&new("failed"), &new("oops")));
}

#[test]
fn is_plain_does_not_match_foreign() {
    let canceled = Error::from_std(Canceled);
    assert!(!is(&new("failed"), &canceled));
}

#[test]
fn is_sees_through_message_wraps() {
    let err = wrap(new("failed"), "oops").unwrap();
    assert!(is(&err, &new("failed")));

    let err = wrapf!(new("failed"), "oops id {}", 5).unwrap();
    assert!(is(&err, &new("failed")));
}

#[test]
fn is_matches_both_sides_of_cause_wrap() {
    let failed = new("failed");
    let oops = new("oops");
    let err = wrap_error(failed.clone(), oops.clone()).unwrap();

    assert_eq!(err.to_string(), "oops: failed");
    assert!(is(&err, &failed));
    assert!(is(&err, &oops));
    assert!(!is(&err, &Error::from_std(Canceled)));
}

#[test]
fn is_reaches_foreign_cause_two_levels_down() {
    let canceled = Error::from_std(Canceled);
    let failed = new("failed");
    let oops = new("oops");

    let err = wrap_error(canceled.clone(), failed.clone()).unwrap();
    let err = wrap_error(err, oops.clone()).unwrap();

    assert!(is(&err, &failed));
    assert!(is(&err, &oops));
    assert!(is(&err, &canceled));
}

#[test]
fn is_foreign_requires_identity() {
    let canceled = Error::from_std(Canceled);
    let err = wrap(canceled, "stopping").unwrap();
    assert!(!is(&err, &Error::from_std(Canceled)));
}

#[test]
fn is_sees_through_enrichment() {
    let failed = new("failed");
    let err = enrich!(failed.clone(), "id", 5).unwrap();

    assert_eq!(err.to_string(), "failed");
    assert!(is(&err, &failed));
    assert!(!is(&err, &Error::from_std(Canceled)));
}

#[test]
fn is_matches_wrap_node_by_identity() {
    let err = wrap(new("failed"), "oops").unwrap();
    let outer = enrich!(err.clone(), "id", 5).unwrap();
    assert!(is(&outer, &err));
}

#[test]
fn tuples_newest_enrichment_first() {
    let err = enrich!(new("failed"), "id", 5).unwrap();
    let err2 = enrich!(err.clone(), "number", 6, "hash", "0X0").unwrap();

    assert_eq!(err.to_string(), "failed");
    assert_eq!(err2.to_string(), "failed");
    assert_eq!(err.as_enriched().unwrap().tuples(), kv!["id", 5]);
    assert_eq!(
        err2.as_enriched().unwrap().tuples(),
        kv!["number", 6, "hash", "0X0", "id", 5]
    );
}

#[test]
fn tuples_follow_cause_chain_last() {
    let stream = enrich!(wrap(new("failed"), "stream blocks"), "block_hash", "0X0").unwrap();
    let err = enrich_wrap_error!(new("oops"), stream.clone(), "b_int", Value::display(42u128))
        .unwrap();

    assert_eq!(stream.to_string(), "stream blocks: failed");
    assert_eq!(stream.as_enriched().unwrap().tuples(), kv!["block_hash", "0X0"]);

    assert_eq!(err.to_string(), "stream blocks: failed: oops");
    assert_eq!(
        err.as_enriched().unwrap().tuples(),
        kv!["b_int", Value::Text("42".into()), "block_hash", "0X0"]
    );
}

#[test]
fn tuples_collect_pairs_from_enriched_cause() {
    let cause_err = enrich!(new("connection reset"), "peer", "10.0.0.7").unwrap();
    let err = enrich_wrap_error!(cause_err, new("fetch failed"), "attempt", 3).unwrap();

    assert_eq!(tuples(&err), kv!["attempt", 3, "peer", "10.0.0.7"]);
}

#[test]
fn tuples_of_plain_chain_are_empty() {
    let err = wrap_error(new("failed"), new("oops")).unwrap();
    assert!(tuples(&err).is_empty());
}

#[test]
fn fields_pair_aggregated_tuples() {
    let err = enrich!(new("failed"), "id", 5).unwrap();
    let err = enrich!(err, "number", 6, "hash", "0X0").unwrap();

    let fields = fields(&err);
    assert_eq!(fields.len(), 3);
    assert_eq!(fields["id"], Value::Int(5));
    assert_eq!(fields["number"], Value::Int(6));
    assert_eq!(fields["hash"], Value::from("0X0"));
    assert_eq!(err.as_enriched().unwrap().fields(), fields);
}

#[test]
fn fields_newest_value_wins() {
    let err = enrich!(new("failed"), "attempt", 1).unwrap();
    let err = enrich!(err, "attempt", 2).unwrap();
    assert_eq!(fields(&err)["attempt"], Value::Int(2));
}

#[test]
fn fields_repeated_key_in_one_enrichment_keeps_last_value() {
    let err = enrich!(new("failed"), "id", 1, "id", 2).unwrap();
    assert_eq!(fields(&err)["id"], Value::Int(2));

    let err = enrich!(err, "id", 3, "id", 4).unwrap();
    assert_eq!(fields(&err)["id"], Value::Int(4));
    assert_eq!(err.as_enriched().unwrap().fields()["id"], Value::Int(4));
}

#[test]
fn fields_store_malformed_tail() {
    let err = enrich!(new("failed"), "id", 5, 7, "orphan").unwrap();

    let fields = fields(&err);
    assert_eq!(fields["id"], Value::Int(5));
    assert_eq!(
        fields[MALFORMED_FIELDS],
        Value::List(vec![Value::Int(7), Value::from("orphan")])
    );
}

#[test]
fn root_cause_follows_cause_edges() {
    let canceled = Error::from_std(Canceled);
    let err = wrap_error(canceled.clone(), new("failed")).unwrap();
    let err = enrich_wrap_error!(err, new("oops"), "id", 5).unwrap();

    assert!(err.root_cause().ptr_eq(&canceled));
    assert!(err.root_cause().downcast_ref::<Canceled>().is_some());
}

#[test]
fn root_cause_without_causes_is_self() {
    let err = wrap(new("failed"), "oops").unwrap();
    assert!(err.root_cause().ptr_eq(&err));
}

#[test]
fn chain_iterates_unwrap_edges() {
    let err = enrich!(wrap(new("failed"), "oops"), "id", 5).unwrap();
    let messages: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    assert_eq!(messages, ["oops: failed", "oops: failed", "failed"]);
}
