mod common;

use common::normalize_sql;
use greg_core::compose::compose;

#[test]
fn revenue_sql() {
    let proposed = compose("What was the total revenue last quarter?");
    insta::assert_snapshot!(normalize_sql(&proposed.sql));
}

#[test]
fn customer_sql() {
    let proposed = compose("Which customers raise the most tickets?");
    insta::assert_snapshot!(normalize_sql(&proposed.sql));
}
