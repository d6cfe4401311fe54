/// Pista del reproductor de música de fondo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub src: &'static str,
    pub title: &'static str,
}
