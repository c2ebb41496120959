use crate::collections::FxIndexMap;
use crate::graph::Edge;


/// Display metadata for a location on the map
/// `x` and `y` are percentages of the map width and height
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub description: String,
}

impl City {
    pub fn new(id: &str, name: &str, x: f64, y: f64, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            x,
            y,
            description: description.to_string(),
        }
    }
}


/// Lookup of city metadata by identifier
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cities: FxIndexMap<String, City>,
}

impl Catalog {

    pub fn new(cities: impl IntoIterator<Item = City>) -> Self {
        Self {
            cities: cities.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }

    /// The built-in Sindh network
    pub fn sindh() -> Self {
        Self::new(
            SINDH_CITIES
                .iter()
                .map(|&(id, name, x, y, description)| City::new(id, name, x, y, description)),
        )
    }

    pub fn get(&self, id: &str) -> Option<&City> {
        self.cities.get(id)
    }

    /// Display name for an identifier, the identifier itself when unknown
    pub fn name_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map_or(id, |c| c.name.as_str())
    }

    /// Find a city by identifier or by case-insensitive name
    pub fn resolve(&self, query: &str) -> Option<&City> {
        self.get(query).or_else(|| {
            self.cities
                .values()
                .find(|c| c.id.eq_ignore_ascii_case(query) || c.name.eq_ignore_ascii_case(query))
        })
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}


/// Road connections of the built-in network, distances in km
pub fn sindh_connections() -> Vec<Edge<u32>> {
    SINDH_CONNECTIONS
        .iter()
        .map(|&(from, to, distance)| Edge::new(from, to, distance))
        .collect()
}

const SINDH_CITIES: [(&str, &str, f64, f64, &str); 14] = [
    ("KHI", "Karachi", 15.0, 85.0, "The financial hub and largest city of Pakistan."),
    ("HYD", "Hyderabad", 28.0, 72.0, "Known for its bangles, rich culture, and history."),
    ("TTA", "Thatta", 22.0, 88.0, "Home to the Makli Necropolis, a UNESCO World Heritage site."),
    ("BDN", "Badin", 42.0, 85.0, "A fertile agricultural region famous for sugar production."),
    ("MPK", "Mirpur Khas", 45.0, 70.0, "The \"City of Mangoes\" in Sindh."),
    ("NWS", "Nawabshah", 40.0, 55.0, "The central crossroads of Sindh, officially Shaheed Benazirabad."),
    ("JMS", "Jamshoro", 26.0, 68.0, "The \"Education City\" of Sindh."),
    ("SKZ", "Sukkur", 65.0, 25.0, "Historic city famous for the Lansdowne Bridge and Sukkur Barrage."),
    ("LKN", "Larkana", 48.0, 32.0, "Gateway to Mohenjo-daro, the ancient Indus Valley site."),
    ("KHP", "Khairpur", 62.0, 35.0, "Known for its dates and the historic Faiz Mahal."),
    ("JCB", "Jacobabad", 55.0, 15.0, "One of the hottest cities in Pakistan during summer."),
    ("DDU", "Dadu", 32.0, 48.0, "Located near the scenic Gorakh Hill station."),
    ("THP", "Tharparkar", 80.0, 78.0, "The desert region of Sindh with unique culture."),
    ("GHT", "Ghotki", 75.0, 20.0, "Important industrial and agricultural center near Punjab border."),
];

const SINDH_CONNECTIONS: [(&str, &str, u32); 20] = [
    ("KHI", "TTA", 100),
    ("KHI", "HYD", 160),
    ("KHI", "JMS", 155),
    ("TTA", "BDN", 110),
    ("BDN", "MPK", 125),
    ("HYD", "MPK", 75),
    ("HYD", "JMS", 15),
    ("HYD", "NWS", 120),
    ("JMS", "DDU", 140),
    ("DDU", "LKN", 105),
    ("LKN", "SKZ", 60),
    ("LKN", "JCB", 90),
    ("SKZ", "KHP", 25),
    ("SKZ", "GHT", 70),
    ("SKZ", "NWS", 185),
    ("NWS", "KHP", 160),
    ("NWS", "MPK", 115),
    ("MPK", "THP", 150),
    ("SKZ", "JCB", 80),
    ("GHT", "KHP", 95),
];
