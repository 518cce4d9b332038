use crate::model::Result;
use indexmap::IndexMap;
use serde_json::{from_str, Value};
use std::fs;

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Ward {
    pub id: String,
    pub name: String,
    pub number: u32,
    pub area: String,
    pub population: u64,
}

// Create
impl Ward {
    pub fn from_config(path: &str) -> Result<Vec<Self>> {
        let json_str = fs::read_to_string(path)?;
        Self::parse(&json_str)
    }

    pub fn new(
        id: impl ToString,
        name: impl ToString,
        number: u32,
        area: impl ToString,
        population: u64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            number,
            area: area.to_string(),
            population,
        }
    }
}

// Parser
impl Ward {
    pub(crate) fn parse(json_str: &str) -> Result<Vec<Self>> {
        let elements: IndexMap<String, Value> = from_str(json_str)?;
        let mut result = Vec::new();
        for (id, details) in elements {
            let Some(name) = details["name"].as_str() else {
                return Err(format!("Not found 'name' field (ward `{id}`)").into());
            };
            let Some(number) = details["number"].as_u64() else {
                return Err(format!("Not found 'number' field (ward `{id}`)").into());
            };
            let Ok(number) = u32::try_from(number) else {
                return Err(format!("Ward number out of range: {number} (ward `{id}`)").into());
            };
            let Some(area) = details["area"].as_str() else {
                return Err(format!("Not found 'area' field (ward `{id}`)").into());
            };
            let Some(population) = details["population"].as_u64() else {
                return Err(format!("Not found 'population' field (ward `{id}`)").into());
            };
            result.push(Self::new(&id, name, number, area, population));
        }
        Ok(result)
    }
}
