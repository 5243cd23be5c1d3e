//! Catalog loading and lookup.
//!
//! A `Catalog` is the read-only set of `ServiceLocation` records for the
//! region, loaded once at startup from the city's GeoJSON open-data exports.
//! Nothing mutates it afterwards; derived indexes are pure functions of a
//! catalog snapshot and are rebuilt by their owners when the catalog
//! reference changes.

use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::categories::{map_food_type, map_poi_type};
use crate::error::Error;
use crate::traits::CatalogProvider;
use crate::types::{Coordinates, DetailValue, ServiceCategory, ServiceId, ServiceLocation};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
    properties: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Vec<f64>,
}

pub struct Catalog {
    services: Vec<ServiceLocation>,
    by_id: HashMap<ServiceId, usize>,
}

impl Catalog {
    /// Build a catalog from already-parsed records. Fails on duplicate ids;
    /// id uniqueness is the one invariant everything downstream leans on.
    pub fn new(services: Vec<ServiceLocation>) -> Result<Self, Error> {
        let mut by_id = HashMap::with_capacity(services.len());
        for (i, s) in services.iter().enumerate() {
            if by_id.insert(s.id.clone(), i).is_some() {
                return Err(Error::Catalog(format!("duplicate service id '{}'", s.id)));
            }
        }
        Ok(Self { services, by_id })
    }

    /// Load every `.json`/`.geojson` file under `data_dir` and merge the
    /// mapped features into one catalog. Files are visited in sorted order so
    /// catalog iteration order is stable across runs.
    pub fn load_dir(data_dir: &Path) -> Result<Self> {
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(data_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            match path.extension().and_then(|s| s.to_str()) {
                Some("json") | Some("geojson") => files.push(path.to_path_buf()),
                _ => {}
            }
        }
        files.sort();
        if files.is_empty() {
            info!("no GeoJSON files found under {}", data_dir.display());
        }

        let mut services = Vec::new();
        for path in &files {
            let raw = std::fs::read_to_string(path)?;
            let collection: FeatureCollection = serde_json::from_str(&raw)?;
            let before = services.len();
            parse_features(&collection, &mut services);
            debug!(
                "loaded {} services from {}",
                services.len() - before,
                path.display()
            );
        }
        info!("catalog: {} services from {} files", services.len(), files.len());
        Ok(Self::new(services)?)
    }

    pub fn all(&self) -> &[ServiceLocation] {
        &self.services
    }

    pub fn get(&self, id: &str) -> Option<&ServiceLocation> {
        self.by_id.get(id).map(|&i| &self.services[i])
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn counts_by_category(&self) -> HashMap<ServiceCategory, usize> {
        let mut counts = HashMap::new();
        for s in &self.services {
            *counts.entry(s.category).or_insert(0) += 1;
        }
        counts
    }
}

impl CatalogProvider for Catalog {
    fn all_services(&self) -> &[ServiceLocation] {
        &self.services
    }
}

fn parse_features(collection: &FeatureCollection, out: &mut Vec<ServiceLocation>) {
    for feature in &collection.features {
        // Both layers use point geometry in [longitude, latitude] order.
        if feature.geometry.kind != "Point" || feature.geometry.coordinates.len() < 2 {
            continue;
        }
        let coordinates = Coordinates {
            longitude: feature.geometry.coordinates[0],
            latitude: feature.geometry.coordinates[1],
        };
        let props = &feature.properties;

        if let Some(service) = parse_food_feature(props, coordinates)
            .or_else(|| parse_poi_feature(props, coordinates))
        {
            out.push(service);
        }
    }
}

/// Food-resources layer: `USER_*` property names, affordability and info URL
/// preserved as details so the chat resolver can surface them.
fn parse_food_feature(
    props: &HashMap<String, serde_json::Value>,
    coordinates: Coordinates,
) -> Option<ServiceLocation> {
    let user_type = prop_str(props, "USER_Type")?;
    let category = map_food_type(Some(user_type))?;
    let object_id = prop_u64(props, "OBJECTID")?;

    let affordability = prop_str(props, "USER_Affordability");

    let mut details = HashMap::new();
    details.insert(
        "sub_description".to_string(),
        DetailValue::Text(user_type.trim().to_string()),
    );
    if let Some(afford) = affordability {
        details.insert("affordability".to_string(), DetailValue::Text(afford.to_string()));
    }
    if let Some(url) = prop_str(props, "USER_More_information") {
        details.insert("more_information".to_string(), DetailValue::Text(url.to_string()));
    }

    Some(ServiceLocation {
        id: format!("food-{object_id}"),
        name: prop_str(props, "USER_Community_Food_Resource_Na")
            .unwrap_or("Unknown Food Resource")
            .to_string(),
        category,
        address: prop_str(props, "USER_Address").unwrap_or("").to_string(),
        coordinates,
        description: format!(
            "{} - {}",
            user_type.trim(),
            affordability.unwrap_or("Contact for pricing")
        ),
        phone: None,
        website: None,
        hours: prop_str(props, "USER_Hours").map(str::to_string),
        details,
    })
}

/// Points-of-interest layer: `POI_*` property names.
fn parse_poi_feature(
    props: &HashMap<String, serde_json::Value>,
    coordinates: Coordinates,
) -> Option<ServiceLocation> {
    let poi_type = prop_str(props, "POI_TYPE_DESC")?;
    let category = map_poi_type(Some(poi_type))?;
    let object_id = prop_u64(props, "OBJECTID")?;

    let mut details = HashMap::new();
    if let Some(sub) = prop_str(props, "SUB_DESCRIPTION") {
        details.insert("sub_description".to_string(), DetailValue::Text(sub.to_string()));
    }

    Some(ServiceLocation {
        id: format!("poi-{object_id}"),
        name: prop_str(props, "POI_NAME")
            .or_else(|| prop_str(props, "MAP_LABEL"))
            .unwrap_or("Unknown Location")
            .to_string(),
        category,
        address: prop_str(props, "ADDRESS").unwrap_or("").to_string(),
        coordinates,
        description: prop_str(props, "SUB_DESCRIPTION")
            .unwrap_or(poi_type)
            .to_string(),
        phone: None,
        website: prop_str(props, "URL").map(str::to_string),
        hours: None,
        details,
    })
}

fn prop_str<'a>(props: &'a HashMap<String, serde_json::Value>, key: &str) -> Option<&'a str> {
    props.get(key).and_then(|v| v.as_str()).filter(|s| !s.trim().is_empty())
}

fn prop_u64(props: &HashMap<String, serde_json::Value>, key: &str) -> Option<u64> {
    props.get(key).and_then(serde_json::Value::as_u64)
}
