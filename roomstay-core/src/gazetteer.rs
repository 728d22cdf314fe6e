//! The fixed city gazetteer: every city Roomstay operates in, with a
//! reference coordinate and the list of its areas.

use crate::entities::geo::{Distance, GeoPoint};

/// The city used whenever location resolution has not (yet) succeeded.
pub const DEFAULT_CITY: &str = "Delhi";

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub pos: GeoPoint,
    pub areas: Vec<String>,
}

/// Immutable lookup table from city name to reference coordinate.
///
/// Loaded once at process start and shared read-only afterwards. The
/// entry order is fixed and decides ties in [`Self::nearest_city`].
#[derive(Debug, Clone)]
pub struct CityGazetteer {
    cities: Vec<City>,
}

impl CityGazetteer {
    pub fn new(cities: Vec<City>) -> Self {
        debug_assert!(!cities.is_empty());
        Self { cities }
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn get(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn areas_of(&self, name: &str) -> &[String] {
        self.get(name).map(|c| c.areas.as_slice()).unwrap_or(&[])
    }

    /// The entry closest to `pos` by great-circle distance.
    ///
    /// The first minimum in entry order wins. Returns `None` for
    /// out-of-range coordinates or an empty gazetteer.
    pub fn nearest_city(&self, pos: GeoPoint) -> Option<&City> {
        let mut nearest: Option<(&City, Distance)> = None;
        for city in &self.cities {
            let distance = GeoPoint::distance(pos, city.pos)?;
            match nearest {
                Some((_, min)) if distance >= min => {}
                _ => nearest = Some((city, distance)),
            }
        }
        nearest.map(|(city, _)| city)
    }
}

impl Default for CityGazetteer {
    /// The built-in gazetteer of the reference build.
    fn default() -> Self {
        let cities = BUILTIN_CITIES
            .iter()
            .map(|&(name, lat, lng, areas)| City {
                name: name.into(),
                pos: GeoPoint::from_lat_lng_deg(lat, lng),
                areas: areas.iter().map(|&a| a.into()).collect(),
            })
            .collect();
        Self::new(cities)
    }
}

#[rustfmt::skip]
const BUILTIN_CITIES: &[(&str, f64, f64, &[&str])] = &[
    ("Prayagraj",  25.4358, 81.8463, &["Civil Lines", "Katra", "Tagore Town", "Allahpur", "Naini"]),
    ("Delhi",      28.6139, 77.209,  &["Karol Bagh", "Laxmi Nagar", "Mukherjee Nagar", "Rajouri Garden", "Saket"]),
    ("Mumbai",     19.076,  72.8777, &["Andheri", "Borivali", "Dadar", "Powai", "Thane"]),
    ("Bangalore",  12.9716, 77.5946, &["Koramangala", "HSR Layout", "Indiranagar", "Marathahalli", "Whitefield"]),
    ("Hyderabad",  17.385,  78.4867, &["Ameerpet", "Gachibowli", "Kukatpally", "Madhapur", "Dilsukhnagar"]),
    ("Chennai",    13.0827, 80.2707, &["Adyar", "Anna Nagar", "T Nagar", "Velachery", "Tambaram"]),
    ("Kolkata",    22.5726, 88.3639, &["Salt Lake", "Garia", "Dum Dum", "Behala", "New Town"]),
    ("Pune",       18.5204, 73.8567, &["Kothrud", "Viman Nagar", "Hinjewadi", "Hadapsar", "Shivajinagar"]),
    ("Jaipur",     26.9124, 75.7873, &["Malviya Nagar", "Vaishali Nagar", "Mansarovar", "Raja Park", "C Scheme"]),
    ("Lucknow",    26.8467, 80.9462, &["Gomti Nagar", "Hazratganj", "Aliganj", "Indira Nagar", "Alambagh"]),
    ("Ahmedabad",  23.0225, 72.5714, &["Navrangpura", "Satellite", "Maninagar", "Bopal", "Vastrapur"]),
    ("Chandigarh", 30.7333, 76.7794, &["Sector 15", "Sector 22", "Sector 34", "Sector 44", "Manimajra"]),
    ("Noida",      28.5355, 77.391,  &["Sector 62", "Sector 18", "Sector 125", "Sector 44", "Greater Noida"]),
    ("Gurgaon",    28.4595, 77.0266, &["DLF Phase 1", "Sector 14", "Sushant Lok", "Sector 56", "Udyog Vihar"]),
    ("Kota",       25.2138, 75.8648, &["Talwandi", "Jawahar Nagar", "Mahaveer Nagar", "Rajeev Gandhi Nagar", "Vigyan Nagar"]),
];
