/// positional identity of a player in the solver dialect.
///
/// every player identity in the output is one of these six labels. Oop and
/// Ip are pinned to the blind posters, Btn to the button seat, and the
/// remaining seats fill Ep, Mp, Co in ascending seat order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Oop,
    Ip,
    Ep,
    Mp,
    Co,
    Btn,
}

impl Role {
    /// fill order for seats not already pinned by the button or a blind.
    pub const fn rotation() -> [Self; 3] {
        [Self::Ep, Self::Mp, Self::Co]
    }

    /// the player label stamped into the output text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Oop => "Pio_OOP",
            Self::Ip => "Pio_IP",
            Self::Ep => "Pio_EP",
            Self::Mp => "Pio_MP",
            Self::Co => "Pio_CO",
            Self::Btn => "Pio_BTN",
        }
    }

    /// the blind annotation a summary seat entry carries for this role.
    pub const fn blind(&self) -> Option<&'static str> {
        match self {
            Self::Oop => Some("(small blind)"),
            Self::Ip => Some("(big blind)"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl crate::Arbitrary for Role {
    fn random() -> Self {
        use rand::Rng;
        match rand::rng().random_range(0..6) {
            0 => Self::Oop,
            1 => Self::Ip,
            2 => Self::Ep,
            3 => Self::Mp,
            4 => Self::Co,
            _ => Self::Btn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert!(Role::Oop.to_string() == "Pio_OOP");
        assert!(Role::Ip.to_string() == "Pio_IP");
        assert!(Role::Ep.to_string() == "Pio_EP");
        assert!(Role::Mp.to_string() == "Pio_MP");
        assert!(Role::Co.to_string() == "Pio_CO");
        assert!(Role::Btn.to_string() == "Pio_BTN");
    }

    #[test]
    fn blind_annotations() {
        assert!(Role::Oop.blind() == Some("(small blind)"));
        assert!(Role::Ip.blind() == Some("(big blind)"));
        assert!(Role::Btn.blind().is_none());
        assert!(Role::Ep.blind().is_none());
    }
}
