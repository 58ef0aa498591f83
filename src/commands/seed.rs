//! Seed command - Loads demo data through the application services.

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::domain::video::VIDEO_TYPE_YOUTUBE;
use crate::domain::{NewEvent, PlayerDetails, ScoutDetails};
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::{NewPlayerAccount, NewScoutAccount, ServiceContainer, Services, VideoUpload};

const ADMIN_EMAIL: &str = "admin@scoutme.com";
const ADMIN_PASSWORD: &str = "admin123";
const SCOUT_PASSWORD: &str = "ojeador123";
const PLAYER_PASSWORD: &str = "jugador123";
const DEMO_VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

struct DemoScout {
    email: &'static str,
    nombre: &'static str,
    apellido: &'static str,
    empresa: &'static str,
    ciudad: &'static str,
    especialidad: &'static str,
    descripcion: &'static str,
    telefono: &'static str,
    sitio_web: &'static str,
}

struct DemoPlayer {
    email: &'static str,
    nombre: &'static str,
    apellido: &'static str,
    nacimiento: (i32, u32, u32),
    ciudad: &'static str,
    deporte: &'static str,
    posicion: &'static str,
    nivel: &'static str,
    descripcion: &'static str,
    altura: f64,
    peso: f64,
    telefono: &'static str,
    videos: &'static [&'static str],
}

struct DemoEvent {
    titulo: &'static str,
    descripcion: &'static str,
    dias: i64,
    ubicacion: &'static str,
    deporte: &'static str,
    capacidad: i32,
}

const SCOUTS: &[DemoScout] = &[
    DemoScout {
        email: "ojeador1@scoutme.com",
        nombre: "Carlos",
        apellido: "Rodríguez",
        empresa: "ScoutPro Agency",
        ciudad: "Buenos Aires",
        especialidad: "Fútbol, Baloncesto",
        descripcion: "Ojeador profesional con más de 10 años de experiencia en el descubrimiento de talento juvenil.",
        telefono: "11 1234-5678",
        sitio_web: "https://scoutpro.com",
    },
    DemoScout {
        email: "ojeador2@scoutme.com",
        nombre: "María",
        apellido: "González",
        empresa: "Talent Hunters",
        ciudad: "Córdoba",
        especialidad: "Tenis, Natación",
        descripcion: "Especialista en deportes individuales. He descubierto varios atletas olímpicos.",
        telefono: "351 987-6543",
        sitio_web: "https://talenthunters.com.ar",
    },
    DemoScout {
        email: "ojeador3@scoutme.com",
        nombre: "Javier",
        apellido: "López",
        empresa: "Elite Sports",
        ciudad: "Rosario",
        especialidad: "Fútbol",
        descripcion: "Enfocado en el fútbol juvenil. Trabajo con clubes profesionales de Europa.",
        telefono: "341 555-1234",
        sitio_web: "https://elitesports.com.ar",
    },
];

const PLAYERS: &[DemoPlayer] = &[
    DemoPlayer {
        email: "jugador1@scoutme.com",
        nombre: "Lionel",
        apellido: "Pérez",
        nacimiento: (2000, 5, 15),
        ciudad: "Buenos Aires",
        deporte: "fútbol",
        posicion: "delantero",
        nivel: "semi-profesional",
        descripcion: "Delantero rápido con excelente definición. He jugado en divisiones juveniles de Boca Juniors.",
        altura: 178.0,
        peso: 75.0,
        telefono: "11 2345-6789",
        videos: &["Goles destacados", "Entrenamiento técnico"],
    },
    DemoPlayer {
        email: "jugador2@scoutme.com",
        nombre: "Diego",
        apellido: "Martínez",
        nacimiento: (1998, 8, 22),
        ciudad: "Buenos Aires",
        deporte: "fútbol",
        posicion: "mediocampista",
        nivel: "profesional",
        descripcion: "Mediocampista creativo con gran visión de juego. Experiencia en Primera División.",
        altura: 175.0,
        peso: 70.0,
        telefono: "11 3456-7890",
        videos: &["Pases y asistencias"],
    },
    DemoPlayer {
        email: "jugador3@scoutme.com",
        nombre: "Ana",
        apellido: "Silva",
        nacimiento: (2002, 3, 10),
        ciudad: "Córdoba",
        deporte: "tenis",
        posicion: "individual",
        nivel: "semi-profesional",
        descripcion: "Tenista con ranking nacional. Especialista en singles y dobles.",
        altura: 165.0,
        peso: 58.0,
        telefono: "351 456-7890",
        videos: &["Partido final provincial"],
    },
    DemoPlayer {
        email: "jugador4@scoutme.com",
        nombre: "Miguel",
        apellido: "Torres",
        nacimiento: (1999, 11, 5),
        ciudad: "Rosario",
        deporte: "baloncesto",
        posicion: "base",
        nivel: "amateur",
        descripcion: "Base rápido con buen manejo de balón. Juego en liga local.",
        altura: 185.0,
        peso: 80.0,
        telefono: "341 567-8901",
        videos: &[],
    },
    DemoPlayer {
        email: "jugador5@scoutme.com",
        nombre: "Sofia",
        apellido: "Ramírez",
        nacimiento: (2001, 7, 18),
        ciudad: "Buenos Aires",
        deporte: "natación",
        posicion: "estilo_libre",
        nivel: "semi-profesional",
        descripcion: "Nadadora especializada en 400m libres. Récords provinciales.",
        altura: 170.0,
        peso: 62.0,
        telefono: "11 6789-0123",
        videos: &["Competencia nacional"],
    },
    DemoPlayer {
        email: "jugador6@scoutme.com",
        nombre: "Lucas",
        apellido: "Fernández",
        nacimiento: (1997, 12, 30),
        ciudad: "Mendoza",
        deporte: "atletismo",
        posicion: "velocista",
        nivel: "profesional",
        descripcion: "Velocista de 100m y 200m. Participé en Juegos Olímpicos de la Juventud.",
        altura: 180.0,
        peso: 75.0,
        telefono: "261 789-0123",
        videos: &["Final 100m", "Entrenamiento de velocidad"],
    },
];

const EVENTS: &[DemoEvent] = &[
    DemoEvent {
        titulo: "Torneo Juvenil de Fútbol",
        descripcion: "Torneo abierto para jugadores de fútbol entre 16 y 20 años. Excelente oportunidad para ser visto por ojeadores.",
        dias: 30,
        ubicacion: "Estadio Municipal, Buenos Aires",
        deporte: "fútbol",
        capacidad: 64,
    },
    DemoEvent {
        titulo: "Clínica de Tenis Avanzado",
        descripcion: "Clínica intensiva de tenis para jugadores de nivel intermedio a avanzado. Instructores profesionales.",
        dias: 45,
        ubicacion: "Club Náutico, Córdoba",
        deporte: "tenis",
        capacidad: 20,
    },
    DemoEvent {
        titulo: "Tryouts Baloncesto Elite",
        descripcion: "Pruebas para equipo juvenil de baloncesto. Buscamos talento para competir en ligas nacionales.",
        dias: 60,
        ubicacion: "Polideportivo Central, Rosario",
        deporte: "baloncesto",
        capacidad: 50,
    },
];

fn scout_details(s: &DemoScout) -> ScoutDetails {
    ScoutDetails {
        nombre: s.nombre.into(),
        apellido: s.apellido.into(),
        empresa: Some(s.empresa.into()),
        pais: Some("AR".into()),
        ciudad: Some(s.ciudad.into()),
        especialidad: Some(s.especialidad.into()),
        descripcion: Some(s.descripcion.into()),
        phone_code: Some("+54".into()),
        telefono: Some(s.telefono.into()),
        sitio_web: Some(s.sitio_web.into()),
    }
}

fn player_details(p: &DemoPlayer) -> AppResult<PlayerDetails> {
    let (year, month, day) = p.nacimiento;
    let birth = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::internal(format!("invalid demo birth date for {}", p.email)))?;

    Ok(PlayerDetails {
        nombre: p.nombre.into(),
        apellido: p.apellido.into(),
        fecha_nacimiento: Some(birth),
        pais: Some("AR".into()),
        ciudad: Some(p.ciudad.into()),
        deporte: p.deporte.into(),
        posicion: Some(p.posicion.into()),
        nivel: Some(p.nivel.into()),
        descripcion: Some(p.descripcion.into()),
        altura: Some(p.altura),
        peso: Some(p.peso),
        phone_code: Some("+54".into()),
        telefono: Some(p.telefono.into()),
        sitio_web: None,
    })
}

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database_url).await?;
    if args.fresh {
        tracing::warn!("Resetting database before seeding...");
        db.fresh_migrations().await?;
    } else {
        db.run_migrations().await?;
    }

    let services = Services::from_connection(db.get_connection(), config);
    seed(&services).await?;

    println!("Usuarios de prueba:");
    println!("Administrador: {} / {}", ADMIN_EMAIL, ADMIN_PASSWORD);
    println!("Ojeadores: ojeador1@scoutme.com .. ojeador3@scoutme.com / {}", SCOUT_PASSWORD);
    println!("Jugadores: jugador1@scoutme.com .. jugador6@scoutme.com / {}", PLAYER_PASSWORD);
    Ok(())
}

/// Create the demo accounts and their content.
pub async fn seed(services: &dyn ServiceContainer) -> AppResult<()> {
    let auth = services.auth();

    auth.create_admin(ADMIN_EMAIL.into(), ADMIN_PASSWORD.into())
        .await?;

    let mut scout_ids: Vec<Uuid> = Vec::with_capacity(SCOUTS.len());
    for s in SCOUTS {
        let account = auth
            .register_scout(NewScoutAccount {
                email: s.email.into(),
                password: SCOUT_PASSWORD.into(),
                details: scout_details(s),
            })
            .await?;
        scout_ids.push(account.user().id);
    }
    tracing::info!(count = scout_ids.len(), "Scouts created");

    let mut player_ids: Vec<Uuid> = Vec::with_capacity(PLAYERS.len());
    for p in PLAYERS {
        let account = auth
            .register_player(NewPlayerAccount {
                email: p.email.into(),
                password: PLAYER_PASSWORD.into(),
                details: player_details(p)?,
            })
            .await?;
        let user_id = account.user().id;

        for titulo in p.videos {
            services
                .videos()
                .upload(
                    user_id,
                    VideoUpload {
                        titulo: titulo.to_string(),
                        descripcion: None,
                        tipo: VIDEO_TYPE_YOUTUBE.into(),
                        url: Some(DEMO_VIDEO_URL.into()),
                        archivo: None,
                    },
                )
                .await?;
        }
        player_ids.push(user_id);
    }
    tracing::info!(count = player_ids.len(), "Players created");

    let today = Utc::now().date_naive();
    for (event, scout_id) in EVENTS.iter().zip(scout_ids.iter().cycle()) {
        services
            .events()
            .create_event(
                *scout_id,
                NewEvent {
                    titulo: event.titulo.into(),
                    descripcion: Some(event.descripcion.into()),
                    fecha: today + Duration::days(event.dias),
                    ubicacion: Some(event.ubicacion.into()),
                    deporte: Some(event.deporte.into()),
                    capacidad_maxima: Some(event.capacidad),
                },
            )
            .await?;
    }
    tracing::info!(count = EVENTS.len(), "Events created");

    if let (Some(scout), Some(player)) = (scout_ids.first(), player_ids.first()) {
        let messages = services.messages();
        let opening = messages
            .send(
                *scout,
                *player,
                "Prueba de nivel".into(),
                "Hola Lionel, vi tus videos y me gustaría invitarte a una prueba.".into(),
            )
            .await?;
        messages
            .reply(
                *player,
                &opening.conversation_id,
                "¡Gracias! Con gusto asisto. ¿Qué día sería?".into(),
            )
            .await?;
        tracing::info!(conversation_id = %opening.conversation_id, "Demo conversation created");
    }

    Ok(())
}
