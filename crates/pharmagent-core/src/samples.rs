//! Example questions offered to new users

pub const SAMPLE_QUERIES: [&str; 10] = [
    "Find respiratory molecules with low competition but high patient burden in emerging markets",
    "Analyze Metformin's potential for repurposing in oncology indications",
    "Which anti-diabetic drugs have patents expiring in the next 2 years?",
    "Show clinical trial landscape for GLP-1 receptor agonists",
    "Identify opportunities in rare disease repurposing for cardiovascular drugs",
    "Analyze import trends for APIs used in respiratory therapies",
    "Find molecules suitable for extended-release formulations with unmet needs",
    "What are the emerging indications for NSAIDs beyond pain management?",
    "Analyze patent landscape for biologics in autoimmune disorders",
    "Show market opportunity for pediatric formulations of existing molecules",
];

/// Look up a sample by its zero-based index
pub fn sample_query(index: usize) -> Option<&'static str> {
    SAMPLE_QUERIES.get(index).copied()
}
