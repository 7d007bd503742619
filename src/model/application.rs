use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Upper bound for the summed application quantity of a single computing node.
pub const MAX_APPLICATIONS: u32 = 10;

/// An application hosted by a computing node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub tasksize: u64,
    pub freq: u64,
    /// Name of the VM instance type the application runs on.
    pub instance: String,
    pub num_of_instruction: u64,
    pub threshold: u32,
    pub strategy: String,
    pub can_join: bool,
    /// Replication count, at least 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl Default for Application {
    fn default() -> Self {
        Self {
            id: String::new(),
            tasksize: 0,
            freq: 0,
            instance: String::new(),
            num_of_instruction: 0,
            threshold: 0,
            strategy: String::new(),
            can_join: false,
            quantity: default_quantity(),
        }
    }
}

impl Application {
    pub fn new(id: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
            ..Self::default()
        }
    }
}

/// Applications of a node, keyed by id and kept in insertion order.
///
/// The order matters: when a node's application target is lowered the
/// entries are truncated front to back. On the wire and in snapshots the
/// map is a JSON object keyed by application id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationMap {
    entries: Vec<Application>,
}

impl ApplicationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an application. A replaced entry keeps its position.
    pub fn insert(&mut self, app: Application) -> Option<Application> {
        match self.entries.iter_mut().find(|a| a.id == app.id) {
            Some(existing) => Some(std::mem::replace(existing, app)),
            None => {
                self.entries.push(app);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Application> {
        self.entries.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Application> {
        self.entries.iter_mut().find(|a| a.id == id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Application> {
        let index = self.entries.iter().position(|a| a.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Application> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|a| a.id.as_str())
    }

    /// Sum of the replication counts of all entries, saturating at `u32::MAX`.
    pub fn total_quantity(&self) -> u32 {
        self.entries
            .iter()
            .fold(0u32, |total, a| total.saturating_add(a.quantity))
    }
}

impl FromIterator<Application> for ApplicationMap {
    fn from_iter<I: IntoIterator<Item = Application>>(iter: I) -> Self {
        let mut map = Self::new();
        for app in iter {
            map.insert(app);
        }
        map
    }
}

impl IntoIterator for ApplicationMap {
    type Item = Application;
    type IntoIter = std::vec::IntoIter<Application>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ApplicationMap {
    type Item = &'a Application;
    type IntoIter = std::slice::Iter<'a, Application>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for ApplicationMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for app in &self.entries {
            map.serialize_entry(&app.id, app)?;
        }
        map.end()
    }
}

struct ApplicationMapVisitor;

impl<'de> Visitor<'de> for ApplicationMapVisitor {
    type Value = ApplicationMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of applications keyed by id")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = ApplicationMap::new();
        while let Some((key, mut app)) = access.next_entry::<String, Application>()? {
            // The key is authoritative, the same way the editor stores it.
            app.id = key;
            map.insert(app);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for ApplicationMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ApplicationMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut map: ApplicationMap = vec![
            Application::new("a1", 1),
            Application::new("a2", 2),
            Application::new("a3", 3),
        ]
        .into_iter()
        .collect();

        let previous = map.insert(Application::new("a2", 5));
        assert_eq!(previous.map(|a| a.quantity), Some(2));
        assert_eq!(map.ids().collect::<Vec<_>>(), vec!["a1", "a2", "a3"]);
        assert_eq!(map.total_quantity(), 9);
    }

    #[test]
    fn total_quantity_saturates() {
        let map: ApplicationMap = vec![Application::new("a1", 1), Application::new("a2", u32::MAX)]
            .into_iter()
            .collect();
        assert_eq!(map.total_quantity(), u32::MAX);
    }

    #[test]
    fn json_object_keeps_order_and_uses_key_as_id() {
        let json = r#"{
            "zeta": {"id": "", "tasksize": 1, "freq": 2, "instance": "a1.large",
                     "numOfInstruction": 3, "threshold": 1, "strategy": "random",
                     "canJoin": true, "quantity": 2},
            "alpha": {"id": "alpha", "tasksize": 1, "freq": 2, "instance": "a1.large",
                      "numOfInstruction": 3, "threshold": 1, "strategy": "random",
                      "canJoin": false}
        }"#;
        let map: ApplicationMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.ids().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(map.get("alpha").unwrap().quantity, 1);

        let encoded = serde_json::to_string(&map).unwrap();
        assert!(encoded.find("zeta").unwrap() < encoded.find("alpha").unwrap());
    }
}
