use anyhow::Result;
use insights_http::{ClientConfig, InsightsClient};

fn connect(api_base: &str) -> Result<InsightsClient> {
    Ok(InsightsClient::new(ClientConfig::new(api_base))?)
}

pub(crate) async fn run_list(api_base: &str) -> Result<()> {
    let insights = connect(api_base)?.fetch_insights().await?;
    println!("{}", serde_json::to_string_pretty(&insights)?);
    Ok(())
}

pub(crate) async fn run_get(api_base: &str, id: i64) -> Result<()> {
    let insight = connect(api_base)?.fetch_insight(id).await?;
    println!("{}", serde_json::to_string_pretty(&insight)?);
    Ok(())
}

pub(crate) async fn run_add(api_base: &str, brand: i64, text: &str) -> Result<()> {
    let insight = connect(api_base)?.create_insight(brand, text).await?;
    println!("{}", serde_json::to_string_pretty(&insight)?);
    Ok(())
}

pub(crate) async fn run_delete(api_base: &str, id: i64) -> Result<()> {
    connect(api_base)?.delete_insight(id).await?;
    println!("Deleted insight {id}");
    Ok(())
}
