use crate::core::fetcher::SparqlFetcher;
use crate::core::parser;
use crate::core::query::QuerySpec;
use crate::core::store::MarkerStore;
use crate::domain::ports::MapRenderer;
use crate::utils::error::Result;

/// Drives one fetch cycle end to end: render the query, fetch once, parse,
/// publish into the store, hand the store contents to the renderer.
///
/// A failed fetch or a structurally broken response never aborts the run:
/// it is logged, the store keeps its previous snapshot, and rendering
/// proceeds with whatever the store holds (possibly zero markers).
pub struct MapEngine<R: MapRenderer> {
    spec: QuerySpec,
    fetcher: SparqlFetcher,
    store: MarkerStore,
    renderer: R,
}

impl<R: MapRenderer> MapEngine<R> {
    pub fn new(spec: QuerySpec, fetcher: SparqlFetcher, renderer: R) -> Self {
        Self {
            spec,
            fetcher,
            store: MarkerStore::new(),
            renderer,
        }
    }

    pub fn store(&self) -> &MarkerStore {
        &self.store
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting marker pipeline...");

        match self.refresh().await {
            Ok(count) => tracing::info!("Fetched {} geographic records", count),
            Err(e) if e.is_recoverable() => {
                tracing::warn!("Fetch cycle failed: {}. Rendering existing markers", e);
            }
            Err(e) => return Err(e),
        }

        let snapshot = self.store.current();
        tracing::info!("Rendering {} markers...", snapshot.records.len());
        let output_path = self.renderer.render(&snapshot).await?;
        tracing::info!("Map written to: {}", output_path);

        Ok(output_path)
    }

    /// One fetch cycle. The store is only touched after the whole response
    /// parsed, so a failure leaves the previous snapshot in place.
    async fn refresh(&self) -> Result<usize> {
        let query = self.spec.to_sparql();
        tracing::debug!("SPARQL query:\n{}", query);

        let body = self.fetcher.fetch(&query).await?;
        let records = parser::parse(&body)?;

        let count = records.len();
        self.store.replace(records);
        Ok(count)
    }
}
