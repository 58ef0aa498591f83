//! Player (jugador) profile.

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Player profile entity
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Player {
    pub id: Uuid,
    pub user_id: Uuid,
    pub nombre: String,
    pub apellido: String,
    pub fecha_nacimiento: Option<NaiveDate>,
    /// Derived from `fecha_nacimiento` at write time
    pub edad: Option<i32>,
    pub pais: Option<String>,
    pub ciudad: Option<String>,
    pub deporte: String,
    pub posicion: Option<String>,
    pub nivel: Option<String>,
    pub descripcion: Option<String>,
    /// Height in cm
    pub altura: Option<f64>,
    /// Weight in kg
    pub peso: Option<f64>,
    pub phone_code: Option<String>,
    pub telefono: Option<String>,
    pub sitio_web: Option<String>,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

/// Editable player fields, shared by registration and profile updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerDetails {
    pub nombre: String,
    pub apellido: String,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub pais: Option<String>,
    pub ciudad: Option<String>,
    pub deporte: String,
    pub posicion: Option<String>,
    pub nivel: Option<String>,
    pub descripcion: Option<String>,
    pub altura: Option<f64>,
    pub peso: Option<f64>,
    pub phone_code: Option<String>,
    pub telefono: Option<String>,
    pub sitio_web: Option<String>,
}

impl PlayerDetails {
    /// Age to store alongside these details, if a birth date is present.
    pub fn age_on(&self, today: NaiveDate) -> Option<i32> {
        self.fecha_nacimiento.map(|birth| calculate_age(birth, today))
    }

    pub fn age_today(&self) -> Option<i32> {
        self.age_on(Utc::now().date_naive())
    }
}

/// Whole years elapsed between `birth` and `today`.
///
/// The year difference is reduced by one while this year's birthday is
/// still ahead.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let before_birthday = (today.month(), today.day()) < (birth.month(), birth.day());
    today.year() - birth.year() - i32::from(before_birthday)
}

/// Player entry returned by the public search API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlayerSummary {
    pub id: Uuid,
    /// Full name
    #[schema(example = "Lionel Pérez")]
    pub nombre: String,
    pub deporte: String,
    pub posicion: Option<String>,
    pub edad: Option<i32>,
    pub pais: Option<String>,
    pub ciudad: Option<String>,
    pub nivel: Option<String>,
    pub descripcion: Option<String>,
}

impl From<Player> for PlayerSummary {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            nombre: player.full_name(),
            deporte: player.deporte,
            posicion: player.posicion,
            edad: player.edad,
            pais: player.pais,
            ciudad: player.ciudad,
            nivel: player.nivel,
            descripcion: player.descripcion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_before_birthday() {
        assert_eq!(calculate_age(date(2000, 5, 15), date(2024, 5, 10)), 23);
    }

    #[test]
    fn test_age_after_birthday() {
        assert_eq!(calculate_age(date(2000, 5, 15), date(2024, 5, 20)), 24);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(calculate_age(date(2000, 5, 15), date(2024, 5, 15)), 24);
    }

    #[test]
    fn test_age_leap_day_birth() {
        assert_eq!(calculate_age(date(2004, 2, 29), date(2023, 2, 28)), 18);
        assert_eq!(calculate_age(date(2004, 2, 29), date(2023, 3, 1)), 19);
    }

    #[test]
    fn test_details_without_birth_date_have_no_age() {
        let details = PlayerDetails::default();
        assert_eq!(details.age_on(date(2024, 1, 1)), None);
    }

    #[test]
    fn test_summary_joins_name() {
        let player = Player {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            nombre: "Ana".into(),
            apellido: "Silva".into(),
            fecha_nacimiento: None,
            edad: None,
            pais: None,
            ciudad: None,
            deporte: "tenis".into(),
            posicion: None,
            nivel: None,
            descripcion: None,
            altura: None,
            peso: None,
            phone_code: None,
            telefono: None,
            sitio_web: None,
        };
        assert_eq!(PlayerSummary::from(player).nombre, "Ana Silva");
    }
}
