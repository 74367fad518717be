//! Demo of the fluent assertion API, from plain chains to promises.

use attest::{registry, that, value, Value};
use regex::Regex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Example 1: predicates consume and return the node, so chains compose
    println!("=== Chaining Example ===");
    that(21).is_a_number()?.is_above(20)?.and_it().is_at_most(21.5)?;
    println!("numeric chain passed");

    // Example 2: structured subjects report full paths on failure
    println!("\n=== Structure Example ===");
    let hex = Regex::new("^#[0-9A-F]{6}$")?;
    let response = value!({
        "status": 200,
        "body": { "colors": ["#00FF00", "#FF0000"] },
    });
    that(response.clone())
        .has_property_and("status", |it| it.is_equal_to(200))?
        .has_property_and("body", |it| {
            it.has_property("colors")?.every(|color| color.matches(&hex))
        })?;
    println!("structure chain passed");

    let failure = that(response).named("response").has_property_and("body", |it| {
        it.has_property("colors")?.every(|color| color.is_a_number())
    });
    if let Err(error) = failure {
        println!("a failure reads: {}", error);
    }

    // Example 3: extension predicates installed by name
    println!("\n=== Registry Example ===");
    registry::install("is_a_hex_color", move |it| it.matches(&hex));
    that("#0AC0FF").apply("is_a_hex_color")?;
    println!("installed predicate passed");

    // Example 4: settlements chain through await
    println!("\n=== Promise Example ===");
    let eventual = Value::promise(async { Ok(Value::from(42)) });
    that(eventual).is_fulfilled().await?.is_equal_to(42)?;
    println!("settlement chain passed");

    Ok(())
}
