//! Fixed choice lists offered by the registration, profile, event and
//! search forms: sports with their positions, levels, countries and
//! phone prefixes.

use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationError;

/// A selectable option as presented to form clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

fn choices(pairs: &[(&str, &str)]) -> Vec<Choice> {
    pairs.iter().map(|(v, l)| Choice::new(*v, *l)).collect()
}

/// Sports a player can practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    Futbol,
    Baloncesto,
    Tenis,
    Voleibol,
    Natacion,
    Atletismo,
    Otro,
}

impl Sport {
    pub const ALL: [Sport; 7] = [
        Sport::Futbol,
        Sport::Baloncesto,
        Sport::Tenis,
        Sport::Voleibol,
        Sport::Natacion,
        Sport::Atletismo,
        Sport::Otro,
    ];

    /// Stored value of the sport.
    pub fn slug(self) -> &'static str {
        match self {
            Sport::Futbol => "fútbol",
            Sport::Baloncesto => "baloncesto",
            Sport::Tenis => "tenis",
            Sport::Voleibol => "voleibol",
            Sport::Natacion => "natación",
            Sport::Atletismo => "atletismo",
            Sport::Otro => "otro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sport::Futbol => "Fútbol",
            Sport::Baloncesto => "Baloncesto",
            Sport::Tenis => "Tenis",
            Sport::Voleibol => "Voleibol",
            Sport::Natacion => "Natación",
            Sport::Atletismo => "Atletismo",
            Sport::Otro => "Otro",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Sport> {
        Sport::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// Positions (or disciplines) offered for this sport.
    pub fn positions(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Sport::Futbol => &[
                ("delantero", "Delantero"),
                ("mediocampista", "Mediocampista"),
                ("defensor", "Defensor"),
                ("portero", "Portero"),
                ("extremo", "Extremo"),
                ("centrocampista", "Centrocampista"),
                ("lateral", "Lateral"),
                ("central", "Central"),
            ],
            Sport::Baloncesto => &[
                ("base", "Base"),
                ("escolta", "Escolta"),
                ("alero", "Alero"),
                ("ala-pivot", "Ala-Pivot"),
                ("pivot", "Pivot"),
                ("playmaker", "Playmaker"),
                ("shooting-guard", "Shooting Guard"),
                ("small-forward", "Small Forward"),
                ("power-forward", "Power Forward"),
                ("center", "Center"),
            ],
            Sport::Tenis => &[
                ("individual", "Individual"),
                ("dobles", "Dobles"),
                ("mixto", "Mixto"),
            ],
            Sport::Voleibol => &[
                ("punta", "Punta"),
                ("libero", "Libero"),
                ("central", "Central"),
                ("opuesto", "Opuesto"),
                ("colocador", "Colocador"),
                ("receptor", "Receptor"),
                ("levantador", "Levantador"),
                ("defensor", "Defensor"),
            ],
            Sport::Natacion => &[
                ("estilo_libre", "Estilo Libre"),
                ("pecho", "Pecho"),
                ("espalda", "Espalda"),
                ("mariposa", "Mariposa"),
                ("combinado_individual", "Combinado Individual"),
                ("relevos", "Relevos"),
                ("relevos_mixtos", "Relevos Mixtos"),
            ],
            Sport::Atletismo => &[
                ("velocista", "Velocista (100m, 200m, 400m)"),
                ("medio_fondo", "Medio Fondo (800m, 1500m)"),
                ("fondo", "Fondo (5000m, 10000m, maratón)"),
                ("marcha", "Marcha"),
                ("saltos", "Saltos (altura, longitud, triple, pértiga)"),
                ("lanzamientos", "Lanzamientos (jabalina, disco, martillo, bala)"),
                ("heptathlon", "Heptathlon"),
                ("decathlon", "Decathlon"),
                ("relevos", "Relevos (4x100m, 4x400m)"),
            ],
            Sport::Otro => &[
                ("general", "General"),
                ("especialista", "Especialista"),
                ("multidisciplinario", "Multidisciplinario"),
            ],
        }
    }

    pub fn has_position(self, position: &str) -> bool {
        self.positions().iter().any(|(slug, _)| *slug == position)
    }
}

/// Competitive levels.
pub const LEVELS: &[(&str, &str)] = &[
    ("amateur", "Amateur"),
    ("semi-profesional", "Semi-profesional"),
    ("profesional", "Profesional"),
];

pub const COUNTRIES: &[(&str, &str)] = &[
    ("AR", "Argentina"),
    ("BR", "Brasil"),
    ("CL", "Chile"),
    ("CO", "Colombia"),
    ("MX", "México"),
    ("PE", "Perú"),
    ("UY", "Uruguay"),
    ("VE", "Venezuela"),
    ("US", "Estados Unidos"),
    ("ES", "España"),
    ("FR", "Francia"),
    ("IT", "Italia"),
    ("DE", "Alemania"),
    ("GB", "Reino Unido"),
    ("PT", "Portugal"),
    ("NL", "Países Bajos"),
    ("BE", "Bélgica"),
    ("CH", "Suiza"),
    ("AT", "Austria"),
    ("SE", "Suecia"),
    ("NO", "Noruega"),
    ("DK", "Dinamarca"),
    ("FI", "Finlandia"),
    ("PL", "Polonia"),
    ("CZ", "República Checa"),
    ("HU", "Hungría"),
    ("RO", "Rumania"),
    ("BG", "Bulgaria"),
    ("GR", "Grecia"),
    ("TR", "Turquía"),
    ("RU", "Rusia"),
    ("JP", "Japón"),
    ("KR", "Corea del Sur"),
    ("CN", "China"),
    ("IN", "India"),
    ("AU", "Australia"),
    ("NZ", "Nueva Zelanda"),
    ("ZA", "Sudáfrica"),
    ("EG", "Egipto"),
    ("MA", "Marruecos"),
    ("TN", "Túnez"),
    ("NG", "Nigeria"),
    ("KE", "Kenia"),
    ("GH", "Ghana"),
    ("CM", "Camerún"),
    ("CI", "Costa de Marfil"),
    ("SN", "Senegal"),
    ("other", "Otro País"),
];

pub const PHONE_CODES: &[(&str, &str)] = &[
    ("+54", "+54 Argentina"),
    ("+55", "+55 Brasil"),
    ("+56", "+56 Chile"),
    ("+57", "+57 Colombia"),
    ("+52", "+52 México"),
    ("+51", "+51 Perú"),
    ("+598", "+598 Uruguay"),
    ("+58", "+58 Venezuela"),
    ("+1", "+1 Estados Unidos/Canadá"),
    ("+34", "+34 España"),
    ("+33", "+33 Francia"),
    ("+39", "+39 Italia"),
    ("+49", "+49 Alemania"),
    ("+44", "+44 Reino Unido"),
    ("+351", "+351 Portugal"),
    ("+31", "+31 Países Bajos"),
    ("+32", "+32 Bélgica"),
    ("+41", "+41 Suiza"),
    ("+43", "+43 Austria"),
    ("+46", "+46 Suecia"),
    ("+47", "+47 Noruega"),
    ("+45", "+45 Dinamarca"),
    ("+358", "+358 Finlandia"),
    ("+48", "+48 Polonia"),
    ("+420", "+420 República Checa"),
    ("+36", "+36 Hungría"),
    ("+40", "+40 Rumania"),
    ("+359", "+359 Bulgaria"),
    ("+30", "+30 Grecia"),
    ("+90", "+90 Turquía"),
    ("+7", "+7 Rusia"),
    ("+81", "+81 Japón"),
    ("+82", "+82 Corea del Sur"),
    ("+86", "+86 China"),
    ("+91", "+91 India"),
    ("+61", "+61 Australia"),
    ("+64", "+64 Nueva Zelanda"),
    ("+27", "+27 Sudáfrica"),
    ("+20", "+20 Egipto"),
    ("+212", "+212 Marruecos"),
    ("+216", "+216 Túnez"),
    ("+234", "+234 Nigeria"),
    ("+254", "+254 Kenia"),
    ("+233", "+233 Ghana"),
    ("+237", "+237 Camerún"),
    ("+225", "+225 Costa de Marfil"),
    ("+221", "+221 Senegal"),
];

/// Every choice list a profile form needs, in one payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FormOptions {
    pub deportes: Vec<Choice>,
    /// Positions keyed by sport value
    pub posiciones: std::collections::BTreeMap<String, Vec<Choice>>,
    pub niveles: Vec<Choice>,
    pub paises: Vec<Choice>,
    pub codigos_telefono: Vec<Choice>,
}

impl FormOptions {
    pub fn build() -> Self {
        Self {
            deportes: sport_choices(),
            posiciones: Sport::ALL
                .into_iter()
                .map(|s| (s.slug().to_string(), choices(s.positions())))
                .collect(),
            niveles: choices(LEVELS),
            paises: choices(COUNTRIES),
            codigos_telefono: choices(PHONE_CODES),
        }
    }
}

pub fn sport_choices() -> Vec<Choice> {
    Sport::ALL
        .into_iter()
        .map(|s| Choice::new(s.slug(), s.label()))
        .collect()
}

fn contains(list: &[(&str, &str)], value: &str) -> bool {
    list.iter().any(|(v, _)| *v == value)
}

fn invalid_choice(code: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some("Selección no válida".into());
    err
}

// =============================================================================
// Validators. An empty string means "not selected" for optional selects.
// =============================================================================

pub fn validate_sport(value: &str) -> Result<(), ValidationError> {
    Sport::from_slug(value)
        .map(|_| ())
        .ok_or_else(|| invalid_choice("deporte"))
}

pub fn validate_optional_sport(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    validate_sport(value)
}

pub fn validate_level(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || contains(LEVELS, value) {
        Ok(())
    } else {
        Err(invalid_choice("nivel"))
    }
}

pub fn validate_country(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || contains(COUNTRIES, value) {
        Ok(())
    } else {
        Err(invalid_choice("pais"))
    }
}

pub fn validate_phone_code(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || contains(PHONE_CODES, value) {
        Ok(())
    } else {
        Err(invalid_choice("phone_code"))
    }
}

/// A position is valid when empty or listed for the given sport.
pub fn position_matches_sport(sport: &str, position: &str) -> bool {
    if position.is_empty() {
        return true;
    }
    Sport::from_slug(sport).is_some_and(|s| s.has_position(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sport_slug_roundtrip() {
        for sport in Sport::ALL {
            assert_eq!(Sport::from_slug(sport.slug()), Some(sport));
        }
        assert_eq!(Sport::from_slug("futbol"), None);
    }

    #[test]
    fn test_positions_are_sport_specific() {
        assert!(position_matches_sport("fútbol", "delantero"));
        assert!(!position_matches_sport("tenis", "delantero"));
        assert!(position_matches_sport("voleibol", "central"));
        assert!(position_matches_sport("tenis", ""));
        assert!(!position_matches_sport("curling", "skip"));
    }

    #[test]
    fn test_optional_selects_accept_empty() {
        assert!(validate_level("").is_ok());
        assert!(validate_level("profesional").is_ok());
        assert!(validate_level("leyenda").is_err());
        assert!(validate_country("AR").is_ok());
        assert!(validate_country("Argentina").is_err());
        assert!(validate_phone_code("+54").is_ok());
        assert!(validate_phone_code("54").is_err());
    }

    #[test]
    fn test_required_sport_rejects_empty() {
        assert!(validate_sport("").is_err());
        assert!(validate_optional_sport("").is_ok());
        assert!(validate_sport("natación").is_ok());
    }

    #[test]
    fn test_form_options_cover_every_sport() {
        let options = FormOptions::build();
        assert_eq!(options.deportes.len(), Sport::ALL.len());
        assert_eq!(options.posiciones.len(), Sport::ALL.len());
        assert_eq!(options.posiciones["tenis"].len(), 3);
    }
}
