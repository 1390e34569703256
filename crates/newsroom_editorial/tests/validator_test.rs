//! Tests for the content validator.

use newsroom_config::{NewsroomConfig, ValidationConfig};
use newsroom_core::{Platform, PlatformPolicy, PlatformPolicyTable, ValidationIssue};
use newsroom_editorial::ContentValidator;
use proptest::prelude::*;
use std::sync::Arc;

fn validator() -> ContentValidator {
    let config = NewsroomConfig::bundled().unwrap();
    ContentValidator::new(Arc::new(config.policy_table().unwrap()), &config.validation).unwrap()
}

fn twitter_post() -> String {
    "El Mundial 2026 tendrá 48 selecciones y 104 partidos repartidos entre tres países.\n\
     Un reto logístico sin precedentes para aficionados y medios.\n\
     ¿Estamos ante el torneo más global de la historia? #Mundial2026"
        .to_string()
}

fn linkedin_post() -> String {
    let mut post = String::from(
        "El deporte español vive un momento de madurez en la gestión de sus derechos audiovisuales.\n\n\
         Esta semana LaLiga ha presentado su nuevo modelo de distribución internacional, con acuerdos \
         en más de cuarenta mercados y una apuesta clara por el streaming directo al aficionado.\n\n\
         Tres claves para entenderlo:\n\
         - La audiencia joven ya no consume televisión lineal y los clubes lo saben.\n\
         - Los ingresos internacionales pesan cada vez más en los presupuestos.\n\
         - La calidad de la producción se ha convertido en un activo de marca.\n\n\
         Después de muchos años cubriendo este sector, creo que el reto no es tecnológico sino \
         cultural: entender que el aficionado de hoy quiere contexto, cercanía y relatos propios.\n\n",
    );
    while post.chars().count() < 880 {
        post.push_str("El periodismo deportivo tiene mucho que aportar en esa transición. ");
    }
    post.push_str("\n\n¿Qué opináis desde vuestra experiencia profesional?\n\n#LaLiga #PeriodismoDeportivo");
    post
}

#[test]
fn test_short_text_with_too_many_hashtags_fails_twice() {
    let result = validator()
        .validate("short text #x #y #z #w #v", Platform::Twitter)
        .unwrap();
    assert!(!result.is_valid());
    assert_eq!(*result.hashtag_count(), 5);
    assert!(result.errors().contains(&ValidationIssue::TooShort { count: 25, min: 120 }));
    assert!(result.errors().contains(&ValidationIssue::TooManyHashtags { count: 5, max: 2 }));

    let messages = result.error_messages().join(" | ").to_lowercase();
    assert!(messages.contains("too short"));
    assert!(messages.contains("too many hashtags: 5 (maximum 2)"));
}

#[test]
fn test_well_formed_tweet_passes() {
    let post = twitter_post();
    let result = validator().validate(&post, Platform::Twitter).unwrap();
    assert!(result.is_valid(), "{:?}", result.errors());
    assert_eq!(*result.hashtag_count(), 1);
    assert!(result.warnings().is_empty());
}

#[test]
fn test_well_formed_linkedin_post_passes_without_warnings() {
    let post = linkedin_post();
    let count = post.chars().count();
    assert!((800..=1400).contains(&count), "fixture is {} chars", count);

    let result = validator().validate(&post, Platform::LinkedIn).unwrap();
    assert!(result.is_valid(), "{:?}", result.errors());
    assert!(result.warnings().is_empty(), "{:?}", result.warnings());
}

#[test]
fn test_missing_closing_is_an_error() {
    let post = twitter_post().replace("¿Estamos ante el torneo más global de la historia?", "Será el torneo más global de la historia.");
    let result = validator().validate(&post, Platform::Twitter).unwrap();
    assert!(!result.is_valid());
    assert_eq!(result.errors(), &vec![ValidationIssue::MissingClosing]);
}

#[test]
fn test_closing_phrase_counts_as_closing() {
    let v = validator();
    assert!(v.has_closing("Texto.\nHabrá que ver cómo responde el vestuario.\n#Fútbol"));
    assert!(v.has_closing("Texto.\nQué observar a partir de ahora: la cantera."));
}

#[test]
fn test_closing_must_be_in_last_three_lines() {
    let v = validator();
    let content = "¿Pregunta al principio?\nUno.\nDos.\nTres.";
    assert!(!v.has_closing(content));
    let content = "Intro.\n¿Pregunta?\n\n\nDos.\n\nTres.";
    assert!(v.has_closing(content));
}

#[test]
fn test_missing_minimum_hashtags_is_a_warning() {
    let post = linkedin_post().replace("#LaLiga #PeriodismoDeportivo", "");
    let result = validator().validate(post.trim(), Platform::LinkedIn).unwrap();
    assert!(result.warnings().contains(&ValidationIssue::TooFewHashtags { count: 0, min: 2 }));
    assert!(result.is_valid());
}

#[test]
fn test_structure_heuristic_only_warns_on_long_form() {
    let flat = format!("{}\n¿Qué opináis? #Deporte #Medios", "a".repeat(900));
    let result = validator().validate(&flat, Platform::LinkedIn).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings().contains(&ValidationIssue::WeakStructure));

    let tweet = twitter_post();
    let result = validator().validate(&tweet, Platform::Twitter).unwrap();
    assert!(!result.warnings().contains(&ValidationIssue::WeakStructure));
}

#[test]
fn test_too_long_reports_maximum() {
    let post = format!("{} ¿Y vosotros?", "x".repeat(300));
    let result = validator().validate(&post, Platform::Twitter).unwrap();
    assert!(result.errors().contains(&ValidationIssue::TooLong { count: 313, max: 280 }));
}

#[test]
fn test_characters_are_counted_not_bytes() {
    let policy = PlatformPolicy::new(3, 3, 0, 0, vec![], false).unwrap();
    let result = validator().validate_with_policy("¿Sí?", &policy);
    assert_eq!(*result.char_count(), 4);
    let result = validator().validate_with_policy("ñá?", &policy);
    assert!(result.is_valid());
}

#[test]
fn test_unicode_hashtags_are_counted() {
    let v = validator();
    assert_eq!(v.count_hashtags("#Fútbol #Año2026 #la_liga # #"), 3);
}

#[test]
fn test_link_anchors_are_not_hashtags() {
    let v = validator();
    assert_eq!(
        v.count_hashtags("Calendario: https://as.com/futbol/mundial#calendario #Mundial2026 #Fútbol"),
        2
    );
    assert_eq!(v.count_hashtags("Ver www.marca.com/#directo y (#LaLiga)"), 1);
    assert_eq!(v.count_hashtags("&#39;entidad&#39; o doble##marca"), 0);

    let post = "El Mundial 2026 tendrá 48 selecciones y 104 partidos repartidos entre tres países.\n\
                Calendario completo: https://as.com/futbol/mundial#calendario\n\
                ¿Estamos ante el torneo más global de la historia? #Mundial2026 #Fútbol";
    let result = v.validate(post, Platform::Twitter).unwrap();
    assert_eq!(*result.hashtag_count(), 2);
    assert!(result.is_valid(), "{:?}", result.errors());
}

#[test]
fn test_question_mark_inside_a_link_is_not_a_closing() {
    let v = validator();
    let post = "El Mundial 2026 tendrá 48 selecciones y 104 partidos repartidos entre tres países.\n\
                Un reto logístico sin precedentes para aficionados y medios. #Mundial2026\n\
                Más información: https://as.com/futbol?id=2026";
    assert!(!v.has_closing(post));
    let result = v.validate(post, Platform::Twitter).unwrap();
    assert_eq!(result.errors(), &vec![ValidationIssue::MissingClosing]);

    assert!(v.has_closing("Texto.\n¿Qué opináis? https://as.com/futbol?id=2026"));
}

#[test]
fn test_unknown_platform_errors() {
    let table = PlatformPolicyTable::new([(
        Platform::Twitter,
        PlatformPolicy::new(1, 10, 0, 1, vec![], false).unwrap(),
    )]);
    let v = ContentValidator::new(Arc::new(table), &ValidationConfig::default()).unwrap();
    assert!(v.validate("hola?", Platform::Instagram).is_err());
}

proptest! {
    #[test]
    fn test_validation_is_deterministic(content in "[a-zA-Z #?\n]{0,400}") {
        let v = validator();
        let a = v.validate(&content, Platform::Twitter).unwrap();
        let b = v.validate(&content, Platform::Twitter).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_valid_content_respects_bounds(content in "[a-z #?\n]{100,300}") {
        let v = validator();
        let result = v.validate(&content, Platform::Twitter).unwrap();
        if result.is_valid() {
            prop_assert!((120..=280).contains(result.char_count()));
            prop_assert!(*result.hashtag_count() <= 2);
            prop_assert!(v.has_closing(&content));
        }
    }
}
