// ============================================================================
// MUSIC VIEWMODEL - Lista de reproducción en rotación
// ============================================================================
// Solo estado: la vista traduce cada `PlayerAction` a llamadas sobre el
// elemento <audio>.
// ============================================================================

use crate::models::Track;

#[derive(Debug, Clone, Copy)]
pub struct Playlist {
    tracks: &'static [Track],
    index: usize,
}

impl Playlist {
    pub fn new(tracks: &'static [Track]) -> Self {
        Self { tracks, index: 0 }
    }

    pub fn current(&self) -> Option<&'static Track> {
        self.tracks.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Siguiente pista, volviendo a la primera tras la última
    pub fn next(&mut self) -> Option<&'static Track> {
        if self.tracks.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.tracks.len();
        self.current()
    }
}

/// Qué debe hacer la vista con el elemento de audio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Cargar `Track` y reproducir
    Play(&'static Track),
    /// Pausar y dejar `Track` cargada para la próxima vez
    PauseAndLoad(&'static Track),
    Nothing,
}

#[derive(Debug, Clone, Copy)]
pub struct MusicPlayer {
    playlist: Playlist,
    playing: bool,
    ready: bool,
}

impl MusicPlayer {
    pub fn new(tracks: &'static [Track]) -> Self {
        Self {
            playlist: Playlist::new(tracks),
            playing: false,
            ready: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// El botón queda deshabilitado hasta `canplaythrough`
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn current(&self) -> Option<&'static Track> {
        self.playlist.current()
    }

    pub fn on_can_play(&mut self) {
        if !self.ready {
            log::debug!("🎵 [MUSIC] Audio listo");
        }
        self.ready = true;
    }

    /// Pausado: reproducir. Sonando: pausar y pasar a la siguiente pista.
    pub fn toggle(&mut self) -> PlayerAction {
        if !self.ready {
            return PlayerAction::Nothing;
        }
        if self.playing {
            self.playing = false;
            match self.advance() {
                Some(track) => {
                    log::info!("⏸️ [MUSIC] Pausa, siguiente: {}", track.title);
                    PlayerAction::PauseAndLoad(track)
                }
                None => PlayerAction::Nothing,
            }
        } else {
            match self.playlist.current() {
                Some(track) => {
                    self.playing = true;
                    log::info!("▶️ [MUSIC] Reproduciendo: {}", track.title);
                    PlayerAction::Play(track)
                }
                None => PlayerAction::Nothing,
            }
        }
    }

    /// Fin de pista: seguir con la siguiente
    pub fn on_ended(&mut self) -> PlayerAction {
        match self.advance() {
            Some(track) => {
                self.playing = true;
                PlayerAction::Play(track)
            }
            None => {
                self.playing = false;
                PlayerAction::Nothing
            }
        }
    }

    /// Pasar de pista. Si cambia, hay que esperar otro `canplaythrough`.
    fn advance(&mut self) -> Option<&'static Track> {
        let previous = self.playlist.index();
        let track = self.playlist.next()?;
        if self.playlist.index() != previous {
            self.ready = false;
        }
        Some(track)
    }

    /// El navegador rechazó `play()` (autoplay bloqueado)
    pub fn on_play_rejected(&mut self) {
        self.playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TRACKS: [Track; 3] = [
        Track { src: "/a.mp3", title: "A" },
        Track { src: "/b.mp3", title: "B" },
        Track { src: "/c.mp3", title: "C" },
    ];

    fn ready_player() -> MusicPlayer {
        let mut player = MusicPlayer::new(&TRACKS);
        player.on_can_play();
        player
    }

    #[test]
    fn playlist_wraps_after_last_track() {
        let mut playlist = Playlist::new(&TRACKS);
        playlist.next();
        playlist.next();
        assert_eq!(playlist.next().map(|t| t.title), Some("A"));
        assert_eq!(playlist.index(), 0);
    }

    #[test]
    fn toggle_is_ignored_until_audio_can_play() {
        let mut player = MusicPlayer::new(&TRACKS);
        assert_eq!(player.toggle(), PlayerAction::Nothing);
        assert!(!player.is_playing());
    }

    #[test]
    fn pausing_advances_to_next_track() {
        let mut player = ready_player();
        assert_eq!(player.toggle(), PlayerAction::Play(&TRACKS[0]));
        assert!(player.is_playing());
        assert_eq!(player.toggle(), PlayerAction::PauseAndLoad(&TRACKS[1]));
        assert!(!player.is_playing());
        player.on_can_play();
        assert_eq!(player.toggle(), PlayerAction::Play(&TRACKS[1]));
    }

    #[test]
    fn new_track_disables_the_button_until_it_can_play() {
        let mut player = ready_player();
        player.toggle();
        player.toggle();
        assert!(!player.is_ready());
        assert_eq!(player.toggle(), PlayerAction::Nothing);

        player.on_can_play();
        player.toggle();
        assert_eq!(player.on_ended(), PlayerAction::Play(&TRACKS[2]));
        assert!(!player.is_ready());
        assert!(player.is_playing());
    }

    #[test]
    fn single_track_stays_ready_when_it_loops() {
        static ONE: [Track; 1] = [Track { src: "/a.mp3", title: "A" }];
        let mut player = MusicPlayer::new(&ONE);
        player.on_can_play();
        player.toggle();
        assert_eq!(player.on_ended(), PlayerAction::Play(&ONE[0]));
        assert!(player.is_ready());
    }

    #[test]
    fn track_end_keeps_playing_the_next_one() {
        let mut player = ready_player();
        player.toggle();
        assert_eq!(player.on_ended(), PlayerAction::Play(&TRACKS[1]));
        assert_eq!(player.on_ended(), PlayerAction::Play(&TRACKS[2]));
        assert_eq!(player.on_ended(), PlayerAction::Play(&TRACKS[0]));
        assert!(player.is_playing());
    }

    #[test]
    fn rejected_play_resets_state() {
        let mut player = ready_player();
        player.toggle();
        player.on_play_rejected();
        assert!(!player.is_playing());
        assert_eq!(player.current().map(|t| t.title), Some("A"));
    }

    #[test]
    fn empty_playlist_does_nothing() {
        let mut player = MusicPlayer::new(&[]);
        player.on_can_play();
        assert_eq!(player.toggle(), PlayerAction::Nothing);
        assert_eq!(player.on_ended(), PlayerAction::Nothing);
    }
}
