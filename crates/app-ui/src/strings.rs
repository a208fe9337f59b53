//! Static display strings

/// Details screen fallback when no title was passed
pub const DETAILS_FALLBACK: &str = "Détail";

/// Search bar placeholder
pub const SEARCH_PLACEHOLDER: &str = "Rechercher...";

/// User screen label
pub const USER_LABEL: &str = "Utilisateur";

/// User avatar image
pub const USER_AVATAR: &str = "https://t3.ftcdn.net/jpg/09/63/80/76/240_F_963807674_6wMpeHZYSjCdDSQ19c607lW1Bx2dRRmB.jpg";

/// Login heading
pub const LOGIN_TITLE: &str = "Connexion";

/// Login email placeholder
pub const EMAIL_PLACEHOLDER: &str = "Email";

/// Login password placeholder
pub const PASSWORD_PLACEHOLDER: &str = "Mot de passe";

/// Login submit label
pub const LOGIN_SUBMIT: &str = "Se connecter";

/// Menu row trailing glyph
pub const CHEVRON_ICON: &str = "chevron-right";

/// Body of an unknown route
pub const NOT_FOUND: &str = "Page introuvable";
