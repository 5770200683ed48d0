use serde_json::{json, Value};

/// One canned result set. Every query resolves to exactly one of these.
#[derive(Debug, Clone)]
pub struct MockDataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetTag {
    Financial,
    Support,
    Content,
    Energy,
    Generic,
}

impl MockDataset {
    fn new(columns: &[&str], rows: Vec<Vec<Value>>) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }
}

/// Literal dataset for a tag, built per call. The row sets are fixed; callers
/// truncate, never extend.
pub fn dataset(tag: DatasetTag) -> MockDataset {
    match tag {
        DatasetTag::Financial => financial(),
        DatasetTag::Support => support(),
        DatasetTag::Content => content(),
        DatasetTag::Energy => energy(),
        DatasetTag::Generic => generic(),
    }
}

fn financial() -> MockDataset {
    MockDataset::new(
        &["month", "total_revenue"],
        vec![
            vec![json!("2024-07-01"), json!(98410.55)],
            vec![json!("2024-08-01"), json!(104772.10)],
            vec![json!("2024-09-01"), json!(91235.00)],
            vec![json!("2024-10-01"), json!(117208.43)],
            vec![json!("2024-11-01"), json!(123001.78)],
            vec![json!("2024-12-01"), json!(149325.16)],
            vec![json!("2025-01-01"), json!(88012.90)],
            vec![json!("2025-02-01"), json!(95477.62)],
            vec![json!("2025-03-01"), json!(102650.34)],
            vec![json!("2025-04-01"), json!(111904.01)],
            vec![json!("2025-05-01"), json!(120338.27)],
            vec![json!("2025-06-01"), json!(126771.49)],
        ],
    )
}

fn support() -> MockDataset {
    MockDataset::new(
        &["ticket_id", "customer_id", "issue_type", "status", "created_at"],
        vec![
            vec![
                json!("TICKET-2001"),
                json!("CUST-3001"),
                json!("billing"),
                json!("open"),
                json!("2025-06-02 09:14:00"),
            ],
            vec![
                json!("TICKET-2002"),
                json!("CUST-3002"),
                json!("outage"),
                json!("in_progress"),
                json!("2025-06-03 11:40:00"),
            ],
            vec![
                json!("TICKET-2003"),
                json!("CUST-3003"),
                json!("connection"),
                json!("closed"),
                json!("2025-06-05 16:05:00"),
            ],
            vec![
                json!("TICKET-2004"),
                json!("CUST-3001"),
                json!("general_inquiry"),
                json!("pending"),
                json!("2025-06-08 08:52:00"),
            ],
            vec![
                json!("TICKET-2005"),
                json!("CUST-3004"),
                json!("billing"),
                json!("closed"),
                json!("2025-06-10 13:27:00"),
            ],
            vec![
                json!("TICKET-2006"),
                json!("CUST-3005"),
                json!("outage"),
                json!("open"),
                json!("2025-06-12 19:44:00"),
            ],
            vec![
                json!("TICKET-2007"),
                json!("CUST-3002"),
                json!("connection"),
                json!("in_progress"),
                json!("2025-06-15 10:18:00"),
            ],
            vec![
                json!("TICKET-2008"),
                json!("CUST-3006"),
                json!("billing"),
                json!("closed"),
                json!("2025-06-17 15:33:00"),
            ],
        ],
    )
}

fn content() -> MockDataset {
    MockDataset::new(
        &["content_id", "title", "read_count", "engagement_score"],
        vec![
            vec![json!("CNT-101"), json!("Quarterly Outlook"), json!(4812), json!(0.91)],
            vec![json!("CNT-102"), json!("Billing Explained"), json!(3977), json!(0.84)],
            vec![json!("CNT-103"), json!("Switching Tariffs"), json!(3120), json!(0.79)],
            vec![json!("CNT-104"), json!("Smart Meter Guide"), json!(2894), json!(0.75)],
            vec![json!("CNT-105"), json!("Winter Saving Tips"), json!(2501), json!(0.68)],
            vec![json!("CNT-106"), json!("Outage Updates"), json!(2188), json!(0.61)],
            vec![json!("CNT-107"), json!("Green Energy FAQ"), json!(1956), json!(0.57)],
            vec![json!("CNT-108"), json!("Moving Home Checklist"), json!(1730), json!(0.52)],
        ],
    )
}

fn energy() -> MockDataset {
    MockDataset::new(
        &["account_id", "read_date", "read_value_kwh"],
        vec![
            vec![json!("ACC1000"), json!("2025-06-20"), json!(412.6)],
            vec![json!("ACC1001"), json!("2025-06-20"), json!(388.4)],
            vec![json!("ACC1002"), json!("2025-06-19"), json!(501.2)],
            vec![json!("ACC1003"), json!("2025-06-19"), json!(275.9)],
            vec![json!("ACC1004"), json!("2025-06-18"), json!(634.7)],
            vec![json!("ACC1005"), json!("2025-06-18"), json!(298.0)],
            vec![json!("ACC1006"), json!("2025-06-17"), json!(455.3)],
            vec![json!("ACC1007"), json!("2025-06-17"), json!(522.8)],
            vec![json!("ACC1008"), json!("2025-06-16"), json!(367.1)],
            vec![json!("ACC1009"), json!("2025-06-16"), json!(489.5)],
        ],
    )
}

fn generic() -> MockDataset {
    MockDataset::new(
        &["id", "value", "timestamp"],
        vec![
            vec![json!(1), json!("sample_value_1"), json!("2025-06-20 12:00:00")],
            vec![json!(2), json!("sample_value_2"), json!("2025-06-20 11:00:00")],
            vec![json!(3), json!("sample_value_3"), json!("2025-06-20 10:00:00")],
            vec![json!(4), json!("sample_value_4"), json!("2025-06-20 09:00:00")],
            vec![json!(5), json!("sample_value_5"), json!("2025-06-20 08:00:00")],
            vec![json!(6), json!("sample_value_6"), json!("2025-06-20 07:00:00")],
            vec![json!(7), json!("sample_value_7"), json!("2025-06-20 06:00:00")],
            vec![json!(8), json!("sample_value_8"), json!("2025-06-20 05:00:00")],
            vec![json!(9), json!("sample_value_9"), json!("2025-06-20 04:00:00")],
            vec![json!(10), json!("sample_value_10"), json!("2025-06-20 03:00:00")],
        ],
    )
}
