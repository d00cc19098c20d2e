/// per-hand seat table and blind bookkeeping.
///
/// the scan pass sits players and notes who posted which blind; `roles`
/// then resolves a total seat-to-role assignment for the hand. identity
/// is hand-scoped, nothing here survives into the next hand.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    seats: BTreeMap<Seat, Record>,
    button: Option<Seat>,
    small: Option<String>,
    big: Option<String>,
}

impl Roster {
    /// add a seat line. a repeated seat number keeps the later record.
    pub fn sit(&mut self, record: Record) {
        self.seats.insert(record.seat, record);
    }

    /// note the button seat, already carried into output numbering.
    pub fn dealer(&mut self, seat: Seat) {
        self.button = Some(seat);
    }

    /// note who posted the small blind.
    pub fn post_small(&mut self, name: &str) {
        self.small = Some(name.to_string());
    }

    /// note who posted the big blind.
    pub fn post_big(&mut self, name: &str) {
        self.big = Some(name.to_string());
    }

    pub fn button(&self) -> Option<Seat> {
        self.button
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// seat records in ascending seat order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.seats.values()
    }

    /// which seat a player occupies, if any.
    pub fn seat(&self, name: &str) -> Option<Seat> {
        self.seats
            .values()
            .find(|record| record.name == name)
            .map(|record| record.seat)
    }

    /// resolve every seated player to a role.
    ///
    /// the button seat takes Btn first, then the small blind poster takes
    /// Oop and the big blind poster takes Ip, each unless their seat is
    /// already claimed (heads up, the button posts the small blind and
    /// keeps Btn). whatever seats remain fill Ep, Mp, Co in ascending
    /// order until the rotation runs out, so a table of any size from two
    /// to six resolves without panicking.
    pub fn roles(&self) -> BTreeMap<Seat, Role> {
        let mut roles = BTreeMap::new();
        if let Some(button) = self.button {
            if self.seats.contains_key(&button) {
                roles.insert(button, Role::Btn);
            }
        }
        if let Some(seat) = self.small.as_deref().and_then(|name| self.seat(name)) {
            roles.entry(seat).or_insert(Role::Oop);
        }
        if let Some(seat) = self.big.as_deref().and_then(|name| self.seat(name)) {
            roles.entry(seat).or_insert(Role::Ip);
        }
        let mut rotation = Role::rotation().into_iter();
        for seat in self.seats.keys() {
            if !roles.contains_key(seat) {
                match rotation.next() {
                    Some(role) => roles.insert(*seat, role),
                    None => break,
                };
            }
        }
        roles
    }

    /// player name to role label pairs, for identity rewriting.
    pub fn identities(&self) -> Vec<(String, Role)> {
        let roles = self.roles();
        self.seats
            .values()
            .filter_map(|record| {
                roles
                    .get(&record.seat)
                    .map(|role| (record.name.clone(), *role))
            })
            .collect()
    }
}

use super::record::Record;
use super::role::Role;
use super::seat::Seat;
use std::collections::BTreeMap;
