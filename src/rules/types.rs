use serde::{Deserialize, Serialize};

/// GeoJSON-shaped geometry carried by a rule:
/// `{"type": "Point", "coordinates": [lng, lat]}` and friends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point([f64; 2]),
    LineString(Vec<[f64; 2]>),
    Polygon(Vec<Vec<[f64; 2]>>),
}

impl Geometry {
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
        }
    }

    /// Short human summary of the coordinate payload.
    pub fn summary(&self) -> String {
        match self {
            Geometry::Point([lng, lat]) => format!("Point at [{lng}, {lat}]"),
            Geometry::LineString(points) => format!("Route with {} waypoints", points.len()),
            Geometry::Polygon(rings) => {
                // the outer ring closes on itself, so drop the repeated vertex
                let vertices = rings
                    .first()
                    .map(|ring| ring.len().saturating_sub(1))
                    .unwrap_or(0);
                format!("Area with {vertices} vertices")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: u32,
    pub name: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub description: String,
    #[serde(rename = "createdDate")]
    pub created_date: String,
    #[serde(rename = "lastModified")]
    pub last_modified: String,
    pub tags: Vec<String>,
    #[serde(rename = "geoJson")]
    pub geometry: Geometry,
}
