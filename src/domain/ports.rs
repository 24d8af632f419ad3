use crate::domain::model::MarkerSnapshot;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn sparql_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn tile_url(&self) -> &str;
    fn result_limit(&self) -> usize;
}

/// Boundary to the external map surface. Implementations receive the full
/// marker snapshot and are responsible for everything visual: tiles, icons,
/// popups. The pipeline only guarantees validated coordinates.
#[async_trait]
pub trait MapRenderer: Send + Sync {
    /// Draws one marker per record and returns where the output landed.
    async fn render(&self, snapshot: &MarkerSnapshot) -> Result<String>;
}
