use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AiRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GraphData {
    pub title: String,
    pub data: GraphSeries,
}

#[derive(Debug, Serialize)]
pub struct GraphSeries {
    pub labels: Vec<String>,
    pub label: String,
    pub values: Vec<u32>,
}

impl GraphData {
    /// The fixed dashboard payload.
    pub fn total_addressable_market() -> Self {
        Self {
            title: "Total Addressable Market (TAM)".to_string(),
            data: GraphSeries {
                labels: vec![
                    "2020".to_string(),
                    "2021".to_string(),
                    "2022".to_string(),
                    "2023".to_string(),
                ],
                label: "Total Addressable Market".to_string(),
                // in billions
                values: vec![20, 30, 40, 50],
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
