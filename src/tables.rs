// src/tables.rs
//
// Static reference data used for exact and fuzzy matching. The tables are
// plain values handed to the parser at construction time, so tests can
// inject minimal ones.

#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub skills: Vec<String>,
    pub places: Vec<String>,
}

impl ReferenceTables {
    pub fn new(skills: Vec<String>, places: Vec<String>) -> Self {
        Self { skills, places }
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self {
            skills: default_skills(),
            places: default_places(),
        }
    }
}

fn default_skills() -> Vec<String> {
    vec![
        "Java", "Spring Boot", "Python", "C++", "C#", "JavaScript", "TypeScript",
        "HTML", "CSS", "React", "Angular", "Vue.js", "Node.js", "Express.js",
        "Django", "Flask", "REST", "GraphQL", "Microservices", "SQL", "MySQL",
        "PostgreSQL", "MongoDB", "Oracle", "SQLite", "Redis", "Docker",
        "Kubernetes", "Jenkins", "Git", "GitHub", "Bitbucket", "GitLab", "AWS",
        "Azure", "Google Cloud", "Linux", "CI/CD", "Agile", "Machine Learning",
        "Deep Learning", "TensorFlow", "PyTorch", "Pandas", "NumPy",
        "Scikit-learn", "Hadoop", "Spark", "Tableau", "Power BI", "Streamlit",
        "Seaborn", "Matplotlib", "Data Science",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_places() -> Vec<String> {
    vec![
        "Mumbai", "Pune", "Delhi", "Bengaluru", "Chennai", "Hyderabad",
        "Kolhapur", "Mohol", "Solapur", "Nashik", "Nagpur", "Goa", "Thane",
        "Aurangabad", "Ahmedabad", "Indore", "Jaipur", "Kolkata", "Surat",
        "Lucknow", "Ranchi", "Bhopal", "Patna", "Kanpur", "Vadodara", "Noida",
        "Gurgaon", "Chandigarh", "Coimbatore", "Vizag", "Maharashtra",
        "Maharastra", "Karnataka", "Gujarat", "Tamil Nadu", "Telangana",
        "West Bengal", "Rajasthan", "Madhya Pradesh", "Uttar Pradesh", "Punjab",
        "Haryana", "Odisha", "Kerala", "Assam", "Ichalkaranji", "Jaysingpur",
        "Sangli",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_are_populated() {
        let tables = ReferenceTables::default();
        assert!(tables.skills.iter().any(|s| s == "Python"));
        assert!(tables.skills.iter().any(|s| s == "Machine Learning"));
        assert!(tables.places.iter().any(|p| p == "Mumbai"));
        assert!(tables.places.iter().any(|p| p == "Tamil Nadu"));
    }

    #[test]
    fn custom_tables_pass_through() {
        let tables = ReferenceTables::new(
            vec!["Rust".to_string()],
            vec!["Berlin".to_string()],
        );
        assert_eq!(tables.skills, vec!["Rust"]);
        assert_eq!(tables.places, vec!["Berlin"]);
    }
}
