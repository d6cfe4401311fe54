// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN (EN / FR)
// ============================================================================

use std::collections::HashMap;

/// Idioma de la interfaz. Se deriva del flag persistido "isFrench".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub fn from_french_flag(is_french: bool) -> Self {
        if is_french {
            Language::Fr
        } else {
            Language::En
        }
    }

    /// Código para el atributo `lang` del documento
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }
}

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: Language) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match lang {
        Language::En => {
            // Home
            translations.insert("greeting", "Hey! I'm");
            translations.insert("name", "Erwan MENAGER");
            translations.insert("nickname", "But online I'm");
            translations.insert("nicknameValue", "Eowin");
            translations.insert("description", "I'm a full-stack developer and a calisthenics athlete.");
            translations.insert("projects", "→ See my projects");
            translations.insert("about", "→ More about me");
            translations.insert("contact", "→ Contact me");
            translations.insert("timeline", "→ My journey");
            translations.insert("language", "FR");

            // About
            translations.insert("aboutTitle", "ABOUT");
            translations.insert("aboutDescription", "Hey! My name is Erwan MENAGER and I'm a french full-stack developer. I'm also a big fan of calisthenics and I've been practicing it since 2023. On average, I train 5 to 6 times a week. I plan to start competing when I feel my level is sufficient. (Yes, I'm a little demanding of myself).");
            translations.insert("resumeButton", "↓ Resume");
            translations.insert("previousImage", "Previous image");
            translations.insert("nextImage", "Next image");

            // Resume
            translations.insert("resumeTitle", "RESUME");
            translations.insert("resumeDescription", "Here's an overview of my professional experience, education, and skills.");
            translations.insert("downloadButton", "Download CV");
            translations.insert("backToAbout", "↑ About");
            translations.insert("lastUpdated", "Last updated");

            // Timeline
            translations.insert("timelineTitle", "JOURNEY");
            translations.insert("education", "Education");
            translations.insert("work", "Work");

            // Projects
            translations.insert("projectsTitle", "PROJECTS");
            translations.insert("projectsDescription", "Here's a selection of my recent projects. Each project represents my interests and skills in different technologies.");
            translations.insert("viewSource", "More...");
            translations.insert("updated", "Updated");
            translations.insert("backToHome", "Back to Home");
            translations.insert("searchProjects", "Search projects...");
            translations.insert("sortBy", "Sort by:");
            translations.insert("alphabetical", "A-Z");
            translations.insert("noProjectsFound", "No projects match your search.");
            translations.insert("showMore", "Show more");
            translations.insert("technologies", "Technologies");
            translations.insert("close", "Close");

            // Contact
            translations.insert("contactTitle", "CONTACT");
            translations.insert("contactDescription", "Feel free to contact me to discuss projects, job opportunities or even a quick question.");
            translations.insert("nameLabel", "Name");
            translations.insert("emailLabel", "Email");
            translations.insert("messageLabel", "Message");
            translations.insert("sendButton", "Send Message");
            translations.insert("messageSent", "Message sent!");
            translations.insert("sending", "Sending...");
            translations.insert("emailError", "Failed to send message. Please try again.");
            translations.insert("cooldownMessage", "Please wait {time} before sending another message.");
            translations.insert("missingFields", "Please fill in every field.");

            // Navigation
            translations.insert("homeLink", "Home");
            translations.insert("aboutLink", "About");
            translations.insert("contactLink", "Contact");
            translations.insert("cvLink", "Resume");
            translations.insert("projectsLink", "Projects");
            translations.insert("timelineLink", "Journey");
            translations.insert("toggleLanguage", "Toggle language");
            translations.insert("toggleDarkMode", "Toggle dark mode");
            translations.insert("toggleMenu", "Toggle menu");

            // Music
            translations.insert("playMusic", "Play music");
            translations.insert("pauseMusic", "Pause music");
        }
        Language::Fr => {
            // Home
            translations.insert("greeting", "Salut ! Je suis");
            translations.insert("name", "Erwan MENAGER");
            translations.insert("nickname", "Mais en ligne je suis");
            translations.insert("nicknameValue", "Eowin");
            translations.insert("description", "Je suis développeur full-stack et athlète de callisthénie.");
            translations.insert("projects", "→ Voir mes projets");
            translations.insert("about", "→ Plus sur moi");
            translations.insert("contact", "→ Me contacter");
            translations.insert("timeline", "→ Mon parcours");
            translations.insert("language", "EN");

            // About
            translations.insert("aboutTitle", "À PROPOS DE MOI");
            translations.insert("aboutDescription", "Salut ! Je m'appelle Erwan MENAGER et je suis développeur full-stack. Je suis également un grand passionné de callisthénie et j'en pratique depuis 2023. En moyenne, je m'entraîne 5 à 6 fois par semaine. Je compte me lancer dans les compétitions quand j'estimerai que mon niveau est suffisant. (Oui, je suis un peu exigeant avec moi-même).");
            translations.insert("resumeButton", "↓ CV");
            translations.insert("previousImage", "Image précédente");
            translations.insert("nextImage", "Image suivante");

            // Resume
            translations.insert("resumeTitle", "CV");
            translations.insert("resumeDescription", "Voici un aperçu de mon expérience professionnelle, de ma formation et de mes compétences.");
            translations.insert("downloadButton", "Télécharger CV");
            translations.insert("backToAbout", "↑ À Propos");
            translations.insert("lastUpdated", "Dernière mise à jour");

            // Timeline
            translations.insert("timelineTitle", "PARCOURS");
            translations.insert("education", "Formation");
            translations.insert("work", "Expérience");

            // Projects
            translations.insert("projectsTitle", "PROJETS");
            translations.insert("projectsDescription", "Voici une sélection de mes projets récents. Chaque projet représente mes intérêts et compétences dans différentes technologies.");
            translations.insert("viewSource", "Plus...");
            translations.insert("updated", "Mis à jour");
            translations.insert("backToHome", "Retour à l'Accueil");
            translations.insert("searchProjects", "Rechercher un projet...");
            translations.insert("sortBy", "Trier par:");
            translations.insert("alphabetical", "Alphabétique");
            translations.insert("noProjectsFound", "Aucun projet ne correspond à votre recherche.");
            translations.insert("showMore", "Voir plus");
            translations.insert("technologies", "Technologies");
            translations.insert("close", "Fermer");

            // Contact
            translations.insert("contactTitle", "CONTACT");
            translations.insert("contactDescription", "N'hésitez pas à me contacter pour discuter de projets, d'opportunités professionnelles ou même une simple question.");
            translations.insert("nameLabel", "Nom");
            translations.insert("emailLabel", "Email");
            translations.insert("messageLabel", "Message");
            translations.insert("sendButton", "Envoyer");
            translations.insert("messageSent", "Message envoyé !");
            translations.insert("sending", "Envoi en cours...");
            translations.insert("emailError", "Échec de l'envoi du message. Veuillez réessayer.");
            translations.insert("cooldownMessage", "Veuillez attendre {time} avant d'envoyer un autre message.");
            translations.insert("missingFields", "Veuillez remplir tous les champs.");

            // Navigation
            translations.insert("homeLink", "Accueil");
            translations.insert("aboutLink", "À Propos");
            translations.insert("contactLink", "Contact");
            translations.insert("cvLink", "CV");
            translations.insert("projectsLink", "Projets");
            translations.insert("timelineLink", "Parcours");
            translations.insert("toggleLanguage", "Changer de langue");
            translations.insert("toggleDarkMode", "Changer de thème");
            translations.insert("toggleMenu", "Ouvrir le menu");

            // Music
            translations.insert("playMusic", "Lancer la musique");
            translations.insert("pauseMusic", "Mettre en pause");
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la clave si no existe traducción
pub fn t(key: &str, lang: Language) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    log::warn!("⚠️ [I18N] Traducción no encontrada: {} ({})", key, lang.code());
    key.to_string()
}

/// Traducción con sustitución de un placeholder `{name}`
pub fn t_with(key: &str, lang: Language, placeholder: &str, value: &str) -> String {
    t(key, lang).replace(&format!("{{{}}}", placeholder), value)
}

/// Nombre del mes (1-12) en el idioma indicado
pub fn month_name(month: u32, lang: Language) -> &'static str {
    const EN: [&str; 12] = [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ];
    const FR: [&str; 12] = [
        "janvier", "février", "mars", "avril", "mai", "juin",
        "juillet", "août", "septembre", "octobre", "novembre", "décembre",
    ];
    let idx = (month.clamp(1, 12) - 1) as usize;
    match lang {
        Language::En => EN[idx],
        Language::Fr => FR[idx],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_languages_define_the_same_keys() {
        let mut en: Vec<_> = get_translations(Language::En).into_keys().collect();
        let mut fr: Vec<_> = get_translations(Language::Fr).into_keys().collect();
        en.sort_unstable();
        fr.sort_unstable();
        assert_eq!(en, fr);
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        assert_eq!(t("doesNotExist", Language::Fr), "doesNotExist");
    }

    #[test]
    fn language_button_shows_the_other_language() {
        assert_eq!(t("language", Language::En), "FR");
        assert_eq!(t("language", Language::Fr), "EN");
    }

    #[test]
    fn placeholder_is_substituted() {
        assert_eq!(
            t_with("cooldownMessage", Language::En, "time", "4:05"),
            "Please wait 4:05 before sending another message."
        );
        assert_eq!(
            t_with("cooldownMessage", Language::Fr, "time", "0:09"),
            "Veuillez attendre 0:09 avant d'envoyer un autre message."
        );
    }

    #[test]
    fn month_names_are_localized() {
        assert_eq!(month_name(5, Language::En), "May");
        assert_eq!(month_name(8, Language::Fr), "août");
    }
}
