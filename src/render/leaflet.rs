use crate::domain::model::MarkerSnapshot;
use crate::domain::ports::{MapRenderer, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

const OUTPUT_FILE: &str = "map.html";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1.0"/>
<title>Birthplaces Map</title>
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/leaflet.min.css"/>
<script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/leaflet.min.js"></script>
<style>
html, body, #map { height: 100%; margin: 0; }
#footer {
    position: absolute; bottom: 0; right: 0; z-index: 1000;
    background: rgba(255, 255, 255, 0.8); padding: 2px 6px;
    font: 12px sans-serif;
}
</style>
</head>
<body>
<div id="map"></div>
<div id="footer">Fetched __FETCHED_AT__</div>
<script>
const markers = __MARKERS__;

const map = L.map('map').setView([0, 0], 2);
L.tileLayer('__TILE_URL__').addTo(map);

const icon = L.icon({
    iconUrl: 'https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images/marker-icon.png',
    iconSize: [25, 41],
    iconAnchor: [12, 41],
    popupAnchor: [1, -34],
    shadowUrl: 'https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images/marker-shadow.png',
    shadowSize: [41, 41],
});

function escapeHtml(text) {
    const div = document.createElement('div');
    div.textContent = text;
    return div.innerHTML;
}

for (const marker of markers) {
    L.marker([marker.latitude, marker.longitude], { icon: icon })
        .addTo(map)
        .bindPopup(
            '<strong>' + escapeHtml(marker.person_name) + '</strong><br/>' +
            'Birthplace: ' + escapeHtml(marker.birth_place_name)
        );
}
</script>
</body>
</html>
"#;

/// Writes a standalone Leaflet page: one marker with a name/birthplace popup
/// per record, on a slippy-map tile layer, with the snapshot's fetch time in
/// a footer. Everything the page needs besides the CDN assets is embedded,
/// so the file can be opened directly.
pub struct LeafletRenderer<S: Storage> {
    storage: S,
    output_dir: String,
    tile_url: String,
}

impl<S: Storage> LeafletRenderer<S> {
    pub fn new(storage: S, output_dir: impl Into<String>, tile_url: impl Into<String>) -> Self {
        Self {
            storage,
            output_dir: output_dir.into(),
            tile_url: tile_url.into(),
        }
    }

    fn render_page(&self, snapshot: &MarkerSnapshot) -> Result<String> {
        // Escaping '<' keeps the embedded JSON from closing the script tag.
        let markers_json = serde_json::to_string(&snapshot.records)?.replace('<', "\\u003c");
        let fetched_at = snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();

        Ok(PAGE_TEMPLATE
            .replace("__MARKERS__", &markers_json)
            .replace("__TILE_URL__", &self.tile_url)
            .replace("__FETCHED_AT__", &fetched_at))
    }
}

#[async_trait]
impl<S: Storage> MapRenderer for LeafletRenderer<S> {
    async fn render(&self, snapshot: &MarkerSnapshot) -> Result<String> {
        let page = self.render_page(snapshot)?;

        tracing::debug!(
            "Writing map page ({} bytes, {} markers) to storage",
            page.len(),
            snapshot.records.len()
        );
        self.storage.write_file(OUTPUT_FILE, page.as_bytes()).await?;

        Ok(format!("{}/{}", self.output_dir, OUTPUT_FILE))
    }
}
