// ============================================================================
// CAROUSEL VIEWMODEL - Fotos de la sección "About"
// ============================================================================

/// Índice circular sobre una lista fija de imágenes
#[derive(Debug, Clone)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
}

impl Carousel {
    pub fn new<S: Into<String>>(images: impl IntoIterator<Item = S>) -> Self {
        Self {
            images: images.into_iter().map(Into::into).collect(),
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + self.images.len() - 1) % self.images.len();
        }
    }
}
