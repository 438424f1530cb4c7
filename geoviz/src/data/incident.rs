use geoviz_types::{GeoPoint, GeoPoint2d, NewGeoPoint};
use serde::{Deserialize, Serialize};

/// Name of the column holding the longitude.
pub const LONGITUDE_COLUMN: &str = "X";
/// Name of the column holding the latitude.
pub const LATITUDE_COLUMN: &str = "Y";
/// Name of the column holding the incident category.
pub const CATEGORY_COLUMN: &str = "Category";

/// A police department incident record.
///
/// The source dataset stores the longitude in the `X` column and the latitude in the `Y` column.
/// Only those two and `Category` are required; the rest of the columns are kept when present and
/// readable, and never fail the record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Incident {
    /// Latitude in degrees.
    #[serde(rename = "Y")]
    pub latitude: f64,
    /// Longitude in degrees.
    #[serde(rename = "X")]
    pub longitude: f64,
    /// Incident category, e.g. `LARCENY/THEFT`.
    #[serde(rename = "Category")]
    pub category: String,
    /// Incident number. Cells that are not a number are read as `None`.
    #[serde(
        rename = "IncidntNum",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub incident_num: Option<u64>,
    /// Free text description.
    #[serde(rename = "Descript", default)]
    pub description: Option<String>,
    /// Day of week the incident happened.
    #[serde(rename = "DayOfWeek", default)]
    pub day_of_week: Option<String>,
    /// Date as written in the source.
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    /// Time as written in the source.
    #[serde(rename = "Time", default)]
    pub time: Option<String>,
    /// Police district.
    #[serde(rename = "PdDistrict", default)]
    pub district: Option<String>,
    /// How the incident was resolved.
    #[serde(rename = "Resolution", default)]
    pub resolution: Option<String>,
    /// Street address.
    #[serde(rename = "Address", default)]
    pub address: Option<String>,
}

impl Incident {
    /// Creates an incident with only the required attributes set.
    pub fn new(latitude: f64, longitude: f64, category: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            category: category.into(),
            incident_num: None,
            description: None,
            day_of_week: None,
            date: None,
            time: None,
            district: None,
            resolution: None,
            address: None,
        }
    }

    /// Location of the incident.
    pub fn position(&self) -> GeoPoint2d {
        GeoPoint2d::latlon(self.latitude, self.longitude)
    }
}

impl GeoPoint for Incident {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.latitude
    }

    fn lon(&self) -> f64 {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use geoviz_types::latlon;

    use super::*;

    #[test]
    fn position_is_y_then_x() {
        let incident = Incident::new(37.775420706711, -122.403404791479, "NON-CRIMINAL");
        assert_eq!(
            incident.position(),
            latlon!(37.775420706711, -122.403404791479)
        );
        assert_eq!(incident.lat(), incident.latitude);
        assert_eq!(incident.lon(), incident.longitude);
    }

    #[test]
    fn deserializes_from_source_columns() {
        let data = "\
IncidntNum,Category,Descript,DayOfWeek,Date,Time,PdDistrict,Resolution,Address,X,Y,Location,PdId
120058272,WEAPON LAWS,POSS OF PROHIBITED WEAPON,Friday,01/29/2016 12:00:00 AM,11:00,SOUTHERN,\"ARREST, BOOKED\",800 Block of BRYANT ST,-122.403404791479,37.775420706711,\"(37.775420706711, -122.403404791479)\",12005827212120
";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let incidents: Vec<Incident> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .expect("valid record");

        assert_eq!(incidents.len(), 1);
        let incident = &incidents[0];
        assert_eq!(incident.category, "WEAPON LAWS");
        assert_eq!(incident.latitude, 37.775420706711);
        assert_eq!(incident.longitude, -122.403404791479);
        assert_eq!(incident.incident_num, Some(120058272));
        assert_eq!(incident.resolution.as_deref(), Some("ARREST, BOOKED"));
        assert_eq!(incident.district.as_deref(), Some("SOUTHERN"));
    }
}
