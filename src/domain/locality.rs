//! Address and organization vocabularies.
//!
//! These drive the whole-line classifiers. A line is an address if it names a
//! well-known Indian city or state, or uses a street-address keyword. A line
//! is an organization if it carries a company suffix.

/// Indian states, union territories and major cities.
///
/// Stand-alone six digit numbers (PIN codes) are deliberately absent: on a
/// Form-16 they collide with rupee amounts.
pub const INDIAN_PLACES: &[&str] = &[
    "Ahmedabad",
    "Bangalore",
    "Bengaluru",
    "Béngaluru",
    "Mumbai",
    "Bombay",
    "Chennai",
    "Kolkata",
    "Calcutta",
    "Hyderabad",
    "Delhi",
    "New Delhi",
    "Pune",
    "Jaipur",
    "Surat",
    "Lucknow",
    "Kanpur",
    "Nagpur",
    "Indore",
    "Thane",
    "Bhopal",
    "Visakhapatnam",
    "Vizag",
    "Vadodara",
    "Baroda",
    "Firozabad",
    "Ludhiana",
    "Patna",
    "Agra",
    "Nashik",
    "Faridabad",
    "Meerut",
    "Rajkot",
    "Kalyan",
    "Vasai",
    "Varanasi",
    "Srinagar",
    "Aurangabad",
    "Dhanbad",
    "Amritsar",
    "Ranchi",
    "Gwalior",
    "Jabalpur",
    "Coimbatore",
    "Guwahati",
    "Chandigarh",
    "Hubli",
    "Dharwad",
    "Mysore",
    "Mysuru",
    "Noida",
    "Ghaziabad",
    "Kozhikode",
    "Calicut",
    "Trivandrum",
    "Thiruvananthapuram",
    "Kochi",
    "Ernakulam",
    "Madurai",
    "Tiruchirappalli",
    "Trichy",
    "Salem",
    "Guntur",
    "Vijayawada",
    "Nellore",
    "Warangal",
    "Karimnagar",
    "Raipur",
    "Bhubaneswar",
    "Cuttack",
    "Shimla",
    "Dehradun",
    "Gangtok",
    "Shillong",
    "Imphal",
    "Aizawl",
    "Kohima",
    "Itanagar",
    "Agartala",
    "Gandhinagar",
    "Allahabad",
    "Prayagraj",
    "Gorakhpur",
    "Bareilly",
    "Jodhpur",
    "Udaipur",
    "Kolhapur",
    "Solapur",
    "Ahmednagar",
    "Mangaluru",
    "Mangalore",
    "Bilaspur",
    "Durgapur",
    "Siliguri",
    "Asansol",
    "Dibrugarh",
    "Panipat",
    "Rohtak",
    "Hisar",
    "Jamshhedpur",
    "Bokaro",
    "Rourkela",
    "Belgaum",
    "Belagavi",
    "Saharanpur",
    "Aligarh",
    "Moradabad",
    "Muzaffarpur",
    "Gaya",
    "Darbhanga",
    "Bhagalpur",
    "Kota",
    "Ajmer",
    "Mathura",
    "Haldwani",
    "Nainital",
    "Pithoragarh",
    "Kullu",
    "Manali",
    "Shimoga",
    "Tumkur",
    "Davangere",
    "Goa",
    "Panaji",
    "Vile Parle",
    "Maharashtra",
    "Gujarat",
    "Karnataka",
    "Tamil Nadu",
    "Uttar Pradesh",
    "Madhya Pradesh",
    "Rajasthan",
    "Punjab",
    "Haryana",
    "Bihar",
    "West Bengal",
    "Odisha",
    "Kerala",
    "Telangana",
    "Andhra Pradesh",
    "Chhattisgarh",
    "Uttarakhand",
    "Himachal Pradesh",
    "Assam",
    "Jharkhand",
    "Tripura",
    "Manipur",
    "Mizoram",
    "Nagaland",
    "Arunachal Pradesh",
    "Sikkim",
    "Meghalaya",
    "Puducherry",
    "Ladakh",
    "Jammu and Kashmir",
    "Andaman and Nicobar Islands",
    "Lakshadweep",
    "Daman and Diu",
    "Dadra and Nagar Haveli",
];

/// Street-address keywords, as regex fragments (abbreviations may carry a dot).
pub const ADDRESS_KEYWORDS: &[&str] = &[
    "House", "Block", "Tower", "Flat", "Floor", "Flr", "Road", r"Rd\.?", "Street", r"St\.?",
    "Lane", r"Ln\.?", "Sector", "Plot", r"Opp\.?", "Near", "Behind",
];

/// Company suffixes, as regex fragments.
pub const ORGANIZATION_SUFFIXES: &[&str] = &[
    r"Pvt\.?\s*Ltd\.?",
    r"Private\s+Limited",
    r"Ltd\.?",
    "Limited",
    "LLP",
    r"L\.L\.P\.?",
    "LLC",
    r"L\.L\.C\.?",
    r"Inc\.?",
    "Incorporated",
    r"Corp\.?",
    "Corporation",
    "Company",
    r"Co\.?\s*Ltd\.?",
    "PLC",
    r"Pte\.?\s*Ltd\.?",
];

/// Case-insensitive, word-bounded alternation over regex fragments.
pub fn word_alternation(fragments: &[&str]) -> String {
    format!(r"(?i)\b(?:{})\b", fragments.join("|"))
}

/// Pattern source matching any known place name.
pub fn places_source() -> String {
    let escaped: Vec<String> = INDIAN_PLACES.iter().map(|p| regex::escape(p)).collect();
    let fragments: Vec<&str> = escaped.iter().map(String::as_str).collect();
    word_alternation(&fragments)
}

pub fn address_keywords_source() -> String {
    word_alternation(ADDRESS_KEYWORDS)
}

pub fn organization_source() -> String {
    word_alternation(ORGANIZATION_SUFFIXES)
}
