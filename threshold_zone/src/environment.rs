// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `Vec`-backed zone registry.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::{Zone, ZoneId, ZoneRegistry};

/// An ordered collection of zones.
///
/// Zones are enumerated in insertion order. Removal keeps the relative order
/// of the remaining zones. Only zones whose [`Zone::is_room`] returns `true`
/// are exposed through [`ZoneRegistry`]; [`Environment::zones`] sees all.
#[derive(Debug)]
pub struct Environment<Z> {
    zones: Vec<(ZoneId, Z)>,
    index: HashMap<ZoneId, usize>,
    next_id: u32,
}

impl<Z> Default for Environment<Z> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Z> Environment<Z> {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zones: Vec::new(),
            index: HashMap::new(),
            next_id: 0,
        }
    }

    /// Number of zones, rooms or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns `true` if there are no zones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Appends a zone and returns its id.
    ///
    /// # Panics
    ///
    /// Panics once the environment has handed out `u32::MAX` ids; use
    /// [`Environment::try_insert`] to handle that case.
    pub fn insert(&mut self, zone: Z) -> ZoneId {
        match self.try_insert(zone) {
            Ok(id) => id,
            Err(_) => panic!("zone ids exhausted"),
        }
    }

    /// Appends a zone and returns its id, or hands the zone back if no id is
    /// left.
    ///
    /// Ids are never reused, so at most `u32::MAX` zones can be inserted over
    /// the lifetime of an environment.
    pub fn try_insert(&mut self, zone: Z) -> Result<ZoneId, Z> {
        let Some(next) = self.next_id.checked_add(1) else {
            return Err(zone);
        };
        let id = ZoneId(self.next_id);
        self.next_id = next;
        self.index.insert(id, self.zones.len());
        self.zones.push((id, zone));
        Ok(id)
    }

    /// Removes a zone, returning it if the id was live.
    pub fn remove(&mut self, id: ZoneId) -> Option<Z> {
        let pos = self.index.remove(&id)?;
        let (_, zone) = self.zones.remove(pos);
        for (slot, (zid, _)) in self.zones.iter().enumerate().skip(pos) {
            self.index.insert(*zid, slot);
        }
        Some(zone)
    }

    /// Looks up any zone by id.
    #[must_use]
    pub fn get(&self, id: ZoneId) -> Option<&Z> {
        self.index.get(&id).map(|&pos| &self.zones[pos].1)
    }

    /// Looks up any zone by id for mutation.
    pub fn get_mut(&mut self, id: ZoneId) -> Option<&mut Z> {
        let pos = *self.index.get(&id)?;
        Some(&mut self.zones[pos].1)
    }

    /// All zones in insertion order.
    pub fn zones(&self) -> impl Iterator<Item = (ZoneId, &Z)> {
        self.zones.iter().map(|(id, z)| (*id, z))
    }
}

impl<Z: Zone> Environment<Z> {
    /// Finds the first zone with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<ZoneId> {
        self.zones
            .iter()
            .find(|(_, z)| z.name() == name)
            .map(|(id, _)| *id)
    }
}

impl<Z: Zone> ZoneRegistry for Environment<Z> {
    type Zone = Z;

    fn rooms(&self) -> impl Iterator<Item = (ZoneId, &Z)> {
        self.zones
            .iter()
            .filter(|(_, z)| z.is_room())
            .map(|(id, z)| (*id, z))
    }

    fn room(&self, id: ZoneId) -> Option<&Z> {
        self.get(id).filter(|z| z.is_room())
    }

    fn room_mut(&mut self, id: ZoneId) -> Option<&mut Z> {
        self.get_mut(id).filter(|z| z.is_room())
    }

    fn for_each_room_mut(&mut self, mut f: impl FnMut(ZoneId, &mut Z)) {
        for (id, zone) in &mut self.zones {
            if zone.is_room() {
                f(*id, zone);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use kurbo::BezPath;

    use super::*;
    use crate::GateId;

    struct Plain {
        name: String,
        room: bool,
        outline: BezPath,
        visits: u32,
        gates: Vec<GateId>,
    }

    fn plain(name: &str, room: bool) -> Plain {
        Plain {
            name: name.into(),
            room,
            outline: BezPath::new(),
            visits: 0,
            gates: Vec::new(),
        }
    }

    impl Zone for Plain {
        fn name(&self) -> &str {
            &self.name
        }
        fn outline(&self) -> &BezPath {
            &self.outline
        }
        fn is_room(&self) -> bool {
            self.room
        }
        fn add_gate(&mut self, gate: GateId) {
            self.gates.push(gate);
        }
        fn remove_gate(&mut self, gate: GateId) {
            self.gates.retain(|g| *g != gate);
        }
        fn visit(&mut self) {
            self.visits += 1;
        }
        fn update_description(&mut self) {}
    }

    #[test]
    fn removal_keeps_order_and_index() {
        let mut env = Environment::new();
        let a = env.insert(plain("a", true));
        let b = env.insert(plain("b", true));
        let c = env.insert(plain("c", true));

        assert_eq!(env.remove(a).map(|z| z.name), Some("a".into()));
        assert!(env.get(a).is_none());
        assert_eq!(env.get(c).map(|z| z.name.as_str()), Some("c"));
        let ids: Vec<_> = env.rooms().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![b, c]);
        assert_eq!(env.remove(a).map(|z| z.name), None);
    }

    #[test]
    fn non_rooms_are_hidden_from_the_registry_surface() {
        let mut env = Environment::new();
        let porch = env.insert(plain("porch", false));
        let den = env.insert(plain("den", true));

        assert!(env.room(porch).is_none());
        assert!(env.room_mut(porch).is_none());
        assert!(env.get(porch).is_some());

        env.for_each_room_mut(|_, z| z.visit());
        assert_eq!(env.get(porch).map(|z| z.visits), Some(0));
        assert_eq!(env.get(den).map(|z| z.visits), Some(1));
        assert_eq!(env.zones().count(), 2);
        assert_eq!(env.find("den"), Some(den));
    }

    #[test]
    fn ids_are_not_reused() {
        let mut env = Environment::new();
        let first = env.insert(plain("x", true));
        env.remove(first);
        let second = env.insert(plain("x", true));
        assert_ne!(first, second);
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn id_space_runs_out_without_wrapping() {
        let mut env = Environment::new();
        env.next_id = u32::MAX - 1;
        let last = env.insert(plain("last", true));
        assert_eq!(last.raw(), u32::MAX - 1);

        let refused = env.try_insert(plain("extra", true));
        assert_eq!(refused.map_err(|z| z.name), Err("extra".into()));
        assert_eq!(env.len(), 1);
        assert_eq!(env.find("last"), Some(last));
    }

    #[test]
    #[should_panic(expected = "zone ids exhausted")]
    fn insert_panics_when_ids_run_out() {
        let mut env = Environment::new();
        env.next_id = u32::MAX;
        env.insert(plain("extra", true));
    }

    #[test]
    fn boxed_zones_forward_calls() {
        let mut env: Environment<alloc::boxed::Box<dyn Zone>> = Environment::new();
        let id = env.insert(alloc::boxed::Box::new(plain("hall", true)));
        if let Some(zone) = env.room_mut(id) {
            zone.add_gate(GateId(7));
        }
        assert_eq!(env.room(id).map(|z| z.name()), Some("hall"));
    }
}
