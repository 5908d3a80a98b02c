#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMapping {
    entries: Vec<(String, Vec<String>)>,
}

impl PropertyMapping {
    pub fn new(entries: Vec<(String, Vec<String>)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, Vec<String>)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn entry(prefix: &str, properties: &[&str]) -> (String, Vec<String>) {
    (
        prefix.to_string(),
        properties.iter().map(|property| property.to_string()).collect(),
    )
}

pub fn padding_mapping() -> PropertyMapping {
    PropertyMapping::new(vec![
        entry("rp", &["padding"]),
        entry("rpl", &["padding-left"]),
        entry("rpr", &["padding-right"]),
        entry("rpt", &["padding-top"]),
        entry("rpb", &["padding-bottom"]),
        entry("rpx", &["padding-left", "padding-right"]),
        entry("rpy", &["padding-top", "padding-bottom"]),
    ])
}

pub fn margin_mapping() -> PropertyMapping {
    PropertyMapping::new(vec![
        entry("rm", &["margin"]),
        entry("rml", &["margin-left"]),
        entry("rmr", &["margin-right"]),
        entry("rmt", &["margin-top"]),
        entry("rmb", &["margin-bottom"]),
        entry("rmx", &["margin-left", "margin-right"]),
        entry("rmy", &["margin-top", "margin-bottom"]),
    ])
}

pub fn font_size_mapping() -> PropertyMapping {
    PropertyMapping::new(vec![entry("rtext", &["font-size"])])
}
