use crate::models::Track;

pub const RESUME_IMAGE: &str = "/img/CV.png";

/// Documento abierto por el botón "Download CV"
pub const RESUME_PDF: &str = "/img/CV.png";

/// Lista de reproducción en rotación. Love Toby Fox <3
pub fn music_tracks() -> &'static [Track] {
    const TRACKS: [Track; 5] = [
        Track { src: "/audio/HisTheme.mp3", title: "His Theme" },
        Track { src: "/audio/CybersWorld.mp3", title: "Cybers World" },
        Track { src: "/audio/RainingSomewhereElse.mp3", title: "Raining Somewhere Else" },
        Track { src: "/audio/WeMeetAgain.mp3", title: "We Meet Again" },
        Track { src: "/audio/BattleAgainstATrueHero.mp3", title: "Battle Against A True Hero" },
    ];
    &TRACKS
}

/// Fotos del carrusel de la sección "About"
pub fn about_images() -> &'static [&'static str] {
    &[
        "/calisthenics1.jpg",
        "/calisthenics2.jpg",
        "/calisthenics3.jpg",
    ]
}
