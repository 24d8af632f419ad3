pub mod leaflet;
