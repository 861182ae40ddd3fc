//! Static content and outbound contracts of the landing page.

pub const BRAND: &str = "ThiagoLira.Dev";
pub const TITLE: &str = "Thiago Systems | Automation & High-Conversion Sales Funnels";
pub const DESCRIPTION: &str = "Specialist in automation and high-conversion sales funnels. Scaling revenue for aesthetic clinics and real estate agencies through technology.";
pub const THEME_COLOR: &str = "#0f0d1a";

pub const WHATSAPP_URL: &str = "https://wa.me/5583996602803";
pub const INSTAGRAM_URL: &str = "https://instagram.com/thiagolira.dev";
pub const INSTAGRAM_HANDLE: &str = "@thiagolira.dev";
pub const EMAIL: &str = "thiagolira@desenvolvedornet.com";

pub const BACKGROUND_VIDEO: &str = "/gifthiago.mp4";
pub const PROJECT_VIDEO: &str = "/gifbeatriz.mp4";
pub const PROFILE_IMAGE: &str = "/profile.jpg";

pub const PIXEL_ID: &str = "1455796019462309";

/// Year the bundle was built, shown in the footer.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Sobre",
        href: "#sobre",
    },
    NavLink {
        label: "Projetos",
        href: "#projetos",
    },
    NavLink {
        label: "Skills",
        href: "#skills",
    },
    NavLink {
        label: "Contato",
        href: "#contato",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Workflow,
    Message,
    Code,
    Zap,
}

impl SkillIcon {
    pub fn class(self) -> &'static str {
        match self {
            Self::Workflow => "icon-workflow",
            Self::Message => "icon-message-square",
            Self::Code => "icon-code-xml",
            Self::Zap => "icon-zap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: SkillIcon,
}

pub const SKILLS: [Skill; 4] = [
    Skill {
        title: "Automação de Processos",
        description: "Desenvolvimento de fluxos inteligentes que eliminam tarefas repetitivas e organizam seu dia a dia.",
        icon: SkillIcon::Workflow,
    },
    Skill {
        title: "API Integrada (WhatsApp)",
        description: "Conecte a API do WhatsApp Business à sua plataforma de vendas para captura de leads em tempo real, respostas automatizadas e sincronização do pipeline.",
        icon: SkillIcon::Message,
    },
    Skill {
        title: "Integrações Inteligentes",
        description: "Conexão entre o seu site e ferramentas externas via WhatsApp API, CRM e bancos de dados.",
        icon: SkillIcon::Code,
    },
    Skill {
        title: "Web Design Premium",
        description: "Criação de interfaces modernas, responsivas e focadas na experiência do usuário.",
        icon: SkillIcon::Zap,
    },
];

/// Form relay the contact form posts to.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/mreaknra";
pub const FORM_METHOD: &str = "POST";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea { rows: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl ContactField {
    /// Value of the `type` attribute for `<input>` fields.
    pub fn input_type(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::TextArea { .. } => None,
        }
    }
}

pub const CONTACT_FIELDS: [ContactField; 3] = [
    ContactField {
        name: "name",
        label: "Nome",
        placeholder: "Seu nome",
        kind: FieldKind::Text,
        required: true,
    },
    ContactField {
        name: "email",
        label: "Email",
        placeholder: "Seuemail@exemplo.com",
        kind: FieldKind::Email,
        required: true,
    },
    ContactField {
        name: "message",
        label: "Mensagem",
        placeholder: "Fale-me sobre o seu projeto....",
        kind: FieldKind::TextArea { rows: 4 },
        required: true,
    },
];

/// Meta pixel loader; queues `init` for the site id and a `PageView`.
pub fn pixel_snippet(pixel_id: &str) -> String {
    // JSON string literal keeps the id inert inside the script
    let id = serde_json::to_string(pixel_id).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"!function(f,b,e,v,n,t,s){{if(f.fbq)return;n=f.fbq=function(){{n.callMethod?n.callMethod.apply(n,arguments):n.queue.push(arguments)}};if(!f._fbq)f._fbq=n;n.push=n;n.loaded=!0;n.version='2.0';n.queue=[];t=b.createElement(e);t.async=!0;t.src=v;s=b.getElementsByTagName(e)[0];s.parentNode.insertBefore(t,s)}}(window,document,'script','https://connect.facebook.net/en_US/fbevents.js');fbq('init',{id});fbq('track','PageView');"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_fields_contract() {
        let names = CONTACT_FIELDS.iter().map(|f| f.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["name", "email", "message"]);
        assert!(CONTACT_FIELDS.iter().all(|f| f.required));
        assert_eq!(CONTACT_FIELDS[0].input_type(), Some("text"));
        assert_eq!(CONTACT_FIELDS[1].input_type(), Some("email"));
        assert_eq!(CONTACT_FIELDS[2].input_type(), None);
        assert_eq!(FORM_METHOD, "POST");
        assert!(FORM_ENDPOINT.starts_with("https://"));
    }

    #[test]
    fn test_nav_links_point_at_sections() {
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#'));
            assert_eq!(&link.href[1..], link.label.to_lowercase());
        }
    }

    #[test]
    fn test_pixel_snippet() {
        let snippet = pixel_snippet(PIXEL_ID);
        assert_eq!(snippet.matches(PIXEL_ID).count(), 1);
        assert!(snippet.contains(r#"fbq('init',"1455796019462309")"#));
        assert!(snippet.contains("fbq('track','PageView')"));

        let hostile = pixel_snippet(r#"1");alert("x"#);
        assert!(hostile.contains(r#"fbq('init',"1\");alert(\"x")"#));
    }

    #[test]
    fn test_outbound_links() {
        assert_eq!(mailto(), "mailto:thiagolira@desenvolvedornet.com");
        assert!(WHATSAPP_URL.starts_with("https://wa.me/"));
        assert_eq!(BUILD_YEAR.len(), 4);
    }
}
