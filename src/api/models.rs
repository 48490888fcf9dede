use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCatalogue {
    pub metrics: Vec<&'static str>,
}
