//! Integration tests for the asynchronous settlement predicates.

use anyhow::Result;
use attest::{classes, that, value, AssertError, ContractViolation, Value};

#[tokio::test]
async fn test_fulfillment() -> Result<()> {
    let resolved = Value::resolved(true);

    that(resolved.clone()).is_fulfilled().await?.is_equal_to(true)?;
    that(resolved.clone())
        .is_fulfilled_and(|it| it.is_equal_to(true))
        .await?;
    that(resolved).becomes(true).await?;
    Ok(())
}

#[tokio::test]
async fn test_rejection() -> Result<()> {
    let rejected = Value::rejected(Value::error("A terrible error"));

    that(rejected.clone()).is_rejected().await?;
    that(rejected.clone())
        .is_rejected_and(|error| {
            error.has_property_and("message", |it| it.is_equal_to("A terrible error"))
        })
        .await?;
    that(rejected).is_rejected_with(&classes::ERROR).await?;
    Ok(())
}

#[tokio::test]
async fn test_settlements_can_disappoint() {
    let resolved = Value::resolved(true);
    let rejected = Value::rejected(Value::error("A terrible error"));

    assert!(that(rejected.clone()).is_fulfilled().await.is_err());
    assert!(that(resolved.clone()).is_rejected().await.is_err());
    assert!(that(resolved.clone())
        .is_fulfilled_and(|it| it.is_equal_to(false))
        .await
        .is_err());
    assert!(that(rejected)
        .is_rejected_and(|error| {
            error.has_property_and("message", |it| it.is_equal_to("A terrible mistake"))
        })
        .await
        .is_err());
    assert!(that(resolved).becomes(false).await.is_err());
}

#[tokio::test]
async fn test_becomes_compares_structurally() -> Result<()> {
    let resolved = Value::resolved(value!({ "ok": true, "items": [1, 2] }));

    that(resolved.clone())
        .becomes(value!({ "ok": true, "items": [1, 2] }))
        .await?;

    assert!(that(resolved)
        .becomes(value!({ "ok": true, "items": [2, 1] }))
        .await
        .is_err());
    Ok(())
}

#[tokio::test]
async fn test_fulfillment_value_chains_keep_the_path() {
    let resolved = Value::resolved(value!({ "status": 404 }));

    let outcome = that(resolved)
        .named("response")
        .is_fulfilled()
        .await
        .and_then(|it| it.has_property_and("status", |status| status.is_equal_to(200)));

    match outcome {
        Err(AssertError::Fault(fault)) => assert_eq!(
            fault.message(),
            "response fulfillment value status property should be equal to 200 but is 404"
        ),
        other => panic!("expected a fault, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_promise_subject_is_a_contract_violation() {
    let future = that(5).is_fulfilled();

    // The violation only surfaces through the returned future.
    match future.await {
        Err(AssertError::Contract(ContractViolation::PromiseRequired { name, .. })) => {
            assert_eq!(name, "actual value");
        }
        other => panic!("expected a contract violation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_one_settlement_backs_many_assertions() -> Result<()> {
    let promise = Value::promise(async {
        tokio::task::yield_now().await;
        Ok(Value::from(42))
    });

    that(promise.clone()).is_fulfilled().await?.is_above(40)?;
    that(promise.clone()).becomes(42).await?;

    let (first, second) = tokio::join!(
        that(promise.clone()).is_fulfilled(),
        that(promise).becomes(42)
    );
    first?;
    second?;
    Ok(())
}
