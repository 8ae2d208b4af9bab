//! Static display tables for personality resolution.

use crate::locale::Translations;

/// Name used when a composite key has no table entry.
pub const UNIQUE_PERSONALITY: Translations = &[("en", "Unique Personality"), ("es", "Personalidad única")];

/// Composite key (`social-decision-energy-leadership`) -> type name.
pub const PERSONALITY_NAMES: &[(&str, Translations)] = &[
    ("extrovert-analytical-active-leader", &[("en", "Dynamic Outgoing Strategist"), ("es", "Estratega sociable y dinámico")]),
    ("extrovert-analytical-active-collaborator", &[("en", "Dynamic Outgoing Analyst"), ("es", "Analista sociable y dinámico")]),
    ("extrovert-analytical-active-supporter", &[("en", "Dynamic Outgoing Advisor"), ("es", "Consejero sociable y dinámico")]),
    ("extrovert-analytical-moderate-leader", &[("en", "Steady Outgoing Strategist"), ("es", "Estratega sociable y constante")]),
    ("extrovert-analytical-moderate-collaborator", &[("en", "Steady Outgoing Analyst"), ("es", "Analista sociable y constante")]),
    ("extrovert-analytical-moderate-supporter", &[("en", "Steady Outgoing Advisor"), ("es", "Consejero sociable y constante")]),
    ("extrovert-analytical-calm-leader", &[("en", "Serene Outgoing Strategist"), ("es", "Estratega sociable y sereno")]),
    ("extrovert-analytical-calm-collaborator", &[("en", "Serene Outgoing Analyst"), ("es", "Analista sociable y sereno")]),
    ("extrovert-analytical-calm-supporter", &[("en", "Serene Outgoing Advisor"), ("es", "Consejero sociable y sereno")]),
    ("extrovert-balanced-active-leader", &[("en", "Dynamic Outgoing Captain"), ("es", "Capitán sociable y dinámico")]),
    ("extrovert-balanced-active-collaborator", &[("en", "Dynamic Outgoing Mediator"), ("es", "Mediador sociable y dinámico")]),
    ("extrovert-balanced-active-supporter", &[("en", "Dynamic Outgoing Ally"), ("es", "Aliado sociable y dinámico")]),
    ("extrovert-balanced-moderate-leader", &[("en", "Steady Outgoing Captain"), ("es", "Capitán sociable y constante")]),
    ("extrovert-balanced-moderate-collaborator", &[("en", "Steady Outgoing Mediator"), ("es", "Mediador sociable y constante")]),
    ("extrovert-balanced-moderate-supporter", &[("en", "Steady Outgoing Ally"), ("es", "Aliado sociable y constante")]),
    ("extrovert-balanced-calm-leader", &[("en", "Serene Outgoing Captain"), ("es", "Capitán sociable y sereno")]),
    ("extrovert-balanced-calm-collaborator", &[("en", "Serene Outgoing Mediator"), ("es", "Mediador sociable y sereno")]),
    ("extrovert-balanced-calm-supporter", &[("en", "Serene Outgoing Ally"), ("es", "Aliado sociable y sereno")]),
    ("extrovert-creative-active-leader", &[("en", "Dynamic Outgoing Visionary"), ("es", "Visionario sociable y dinámico")]),
    ("extrovert-creative-active-collaborator", &[("en", "Dynamic Outgoing Innovator"), ("es", "Innovador sociable y dinámico")]),
    ("extrovert-creative-active-supporter", &[("en", "Dynamic Outgoing Inspirer"), ("es", "Inspirador sociable y dinámico")]),
    ("extrovert-creative-moderate-leader", &[("en", "Steady Outgoing Visionary"), ("es", "Visionario sociable y constante")]),
    ("extrovert-creative-moderate-collaborator", &[("en", "Steady Outgoing Innovator"), ("es", "Innovador sociable y constante")]),
    ("extrovert-creative-moderate-supporter", &[("en", "Steady Outgoing Inspirer"), ("es", "Inspirador sociable y constante")]),
    ("extrovert-creative-calm-leader", &[("en", "Serene Outgoing Visionary"), ("es", "Visionario sociable y sereno")]),
    ("extrovert-creative-calm-collaborator", &[("en", "Serene Outgoing Innovator"), ("es", "Innovador sociable y sereno")]),
    ("extrovert-creative-calm-supporter", &[("en", "Serene Outgoing Inspirer"), ("es", "Inspirador sociable y sereno")]),
    ("ambivert-analytical-active-leader", &[("en", "Dynamic Adaptable Strategist"), ("es", "Estratega adaptable y dinámico")]),
    ("ambivert-analytical-active-collaborator", &[("en", "Dynamic Adaptable Analyst"), ("es", "Analista adaptable y dinámico")]),
    ("ambivert-analytical-active-supporter", &[("en", "Dynamic Adaptable Advisor"), ("es", "Consejero adaptable y dinámico")]),
    ("ambivert-analytical-moderate-leader", &[("en", "Steady Adaptable Strategist"), ("es", "Estratega adaptable y constante")]),
    ("ambivert-analytical-moderate-collaborator", &[("en", "Steady Adaptable Analyst"), ("es", "Analista adaptable y constante")]),
    ("ambivert-analytical-moderate-supporter", &[("en", "Steady Adaptable Advisor"), ("es", "Consejero adaptable y constante")]),
    ("ambivert-analytical-calm-leader", &[("en", "Serene Adaptable Strategist"), ("es", "Estratega adaptable y sereno")]),
    ("ambivert-analytical-calm-collaborator", &[("en", "Serene Adaptable Analyst"), ("es", "Analista adaptable y sereno")]),
    ("ambivert-analytical-calm-supporter", &[("en", "Serene Adaptable Advisor"), ("es", "Consejero adaptable y sereno")]),
    ("ambivert-balanced-active-leader", &[("en", "Dynamic Adaptable Captain"), ("es", "Capitán adaptable y dinámico")]),
    ("ambivert-balanced-active-collaborator", &[("en", "Dynamic Adaptable Mediator"), ("es", "Mediador adaptable y dinámico")]),
    ("ambivert-balanced-active-supporter", &[("en", "Dynamic Adaptable Ally"), ("es", "Aliado adaptable y dinámico")]),
    ("ambivert-balanced-moderate-leader", &[("en", "Steady Adaptable Captain"), ("es", "Capitán adaptable y constante")]),
    ("ambivert-balanced-moderate-collaborator", &[("en", "Steady Adaptable Mediator"), ("es", "Mediador adaptable y constante")]),
    ("ambivert-balanced-moderate-supporter", &[("en", "Steady Adaptable Ally"), ("es", "Aliado adaptable y constante")]),
    ("ambivert-balanced-calm-leader", &[("en", "Serene Adaptable Captain"), ("es", "Capitán adaptable y sereno")]),
    ("ambivert-balanced-calm-collaborator", &[("en", "Serene Adaptable Mediator"), ("es", "Mediador adaptable y sereno")]),
    ("ambivert-balanced-calm-supporter", &[("en", "Serene Adaptable Ally"), ("es", "Aliado adaptable y sereno")]),
    ("ambivert-creative-active-leader", &[("en", "Dynamic Adaptable Visionary"), ("es", "Visionario adaptable y dinámico")]),
    ("ambivert-creative-active-collaborator", &[("en", "Dynamic Adaptable Innovator"), ("es", "Innovador adaptable y dinámico")]),
    ("ambivert-creative-active-supporter", &[("en", "Dynamic Adaptable Inspirer"), ("es", "Inspirador adaptable y dinámico")]),
    ("ambivert-creative-moderate-leader", &[("en", "Steady Adaptable Visionary"), ("es", "Visionario adaptable y constante")]),
    ("ambivert-creative-moderate-collaborator", &[("en", "Steady Adaptable Innovator"), ("es", "Innovador adaptable y constante")]),
    ("ambivert-creative-moderate-supporter", &[("en", "Steady Adaptable Inspirer"), ("es", "Inspirador adaptable y constante")]),
    ("ambivert-creative-calm-leader", &[("en", "Serene Adaptable Visionary"), ("es", "Visionario adaptable y sereno")]),
    ("ambivert-creative-calm-collaborator", &[("en", "Serene Adaptable Innovator"), ("es", "Innovador adaptable y sereno")]),
    ("ambivert-creative-calm-supporter", &[("en", "Serene Adaptable Inspirer"), ("es", "Inspirador adaptable y sereno")]),
    ("introvert-analytical-active-leader", &[("en", "Dynamic Reflective Strategist"), ("es", "Estratega reflexivo y dinámico")]),
    ("introvert-analytical-active-collaborator", &[("en", "Dynamic Reflective Analyst"), ("es", "Analista reflexivo y dinámico")]),
    ("introvert-analytical-active-supporter", &[("en", "Dynamic Reflective Advisor"), ("es", "Consejero reflexivo y dinámico")]),
    ("introvert-analytical-moderate-leader", &[("en", "Steady Reflective Strategist"), ("es", "Estratega reflexivo y constante")]),
    ("introvert-analytical-moderate-collaborator", &[("en", "Steady Reflective Analyst"), ("es", "Analista reflexivo y constante")]),
    ("introvert-analytical-moderate-supporter", &[("en", "Steady Reflective Advisor"), ("es", "Consejero reflexivo y constante")]),
    ("introvert-analytical-calm-leader", &[("en", "Serene Reflective Strategist"), ("es", "Estratega reflexivo y sereno")]),
    ("introvert-analytical-calm-collaborator", &[("en", "Serene Reflective Analyst"), ("es", "Analista reflexivo y sereno")]),
    ("introvert-analytical-calm-supporter", &[("en", "Serene Reflective Advisor"), ("es", "Consejero reflexivo y sereno")]),
    ("introvert-balanced-active-leader", &[("en", "Dynamic Reflective Captain"), ("es", "Capitán reflexivo y dinámico")]),
    ("introvert-balanced-active-collaborator", &[("en", "Dynamic Reflective Mediator"), ("es", "Mediador reflexivo y dinámico")]),
    ("introvert-balanced-active-supporter", &[("en", "Dynamic Reflective Ally"), ("es", "Aliado reflexivo y dinámico")]),
    ("introvert-balanced-moderate-leader", &[("en", "Steady Reflective Captain"), ("es", "Capitán reflexivo y constante")]),
    ("introvert-balanced-moderate-collaborator", &[("en", "Steady Reflective Mediator"), ("es", "Mediador reflexivo y constante")]),
    ("introvert-balanced-moderate-supporter", &[("en", "Steady Reflective Ally"), ("es", "Aliado reflexivo y constante")]),
    ("introvert-balanced-calm-leader", &[("en", "Serene Reflective Captain"), ("es", "Capitán reflexivo y sereno")]),
    ("introvert-balanced-calm-collaborator", &[("en", "Serene Reflective Mediator"), ("es", "Mediador reflexivo y sereno")]),
    ("introvert-balanced-calm-supporter", &[("en", "Serene Reflective Ally"), ("es", "Aliado reflexivo y sereno")]),
    ("introvert-creative-active-leader", &[("en", "Dynamic Reflective Visionary"), ("es", "Visionario reflexivo y dinámico")]),
    ("introvert-creative-active-collaborator", &[("en", "Dynamic Reflective Innovator"), ("es", "Innovador reflexivo y dinámico")]),
    ("introvert-creative-active-supporter", &[("en", "Dynamic Reflective Inspirer"), ("es", "Inspirador reflexivo y dinámico")]),
    ("introvert-creative-moderate-leader", &[("en", "Steady Reflective Visionary"), ("es", "Visionario reflexivo y constante")]),
    ("introvert-creative-moderate-collaborator", &[("en", "Steady Reflective Innovator"), ("es", "Innovador reflexivo y constante")]),
    ("introvert-creative-moderate-supporter", &[("en", "Steady Reflective Inspirer"), ("es", "Inspirador reflexivo y constante")]),
    ("introvert-creative-calm-leader", &[("en", "Serene Reflective Visionary"), ("es", "Visionario reflexivo y sereno")]),
    ("introvert-creative-calm-collaborator", &[("en", "Serene Reflective Innovator"), ("es", "Innovador reflexivo y sereno")]),
    ("introvert-creative-calm-supporter", &[("en", "Serene Reflective Inspirer"), ("es", "Inspirador reflexivo y sereno")]),
];

/// Style label -> trait words (1-2 per label).
pub const STYLE_TRAITS: &[(&str, &[Translations])] = &[
    ("extrovert", &[&[("en", "Outgoing"), ("es", "Extrovertido")], &[("en", "Energized by people"), ("es", "Se energiza con la gente")]]),
    ("ambivert", &[&[("en", "Adaptable"), ("es", "Adaptable")], &[("en", "Socially flexible"), ("es", "Socialmente flexible")]]),
    ("introvert", &[&[("en", "Thoughtful"), ("es", "Reflexivo")], &[("en", "Values deep connections"), ("es", "Valora las conexiones profundas")]]),
    ("analytical", &[&[("en", "Logical"), ("es", "Lógico")]]),
    ("balanced", &[&[("en", "Pragmatic"), ("es", "Pragmático")]]),
    ("creative", &[&[("en", "Imaginative"), ("es", "Imaginativo")], &[("en", "Intuitive"), ("es", "Intuitivo")]]),
    ("active", &[&[("en", "Energetic"), ("es", "Enérgico")]]),
    ("moderate", &[&[("en", "Even-paced"), ("es", "De ritmo constante")]]),
    ("calm", &[&[("en", "Calm"), ("es", "Tranquilo")], &[("en", "Patient"), ("es", "Paciente")]]),
    ("leader", &[&[("en", "Takes initiative"), ("es", "Toma la iniciativa")]]),
    ("collaborator", &[&[("en", "Team player"), ("es", "Trabaja en equipo")]]),
    ("supporter", &[&[("en", "Supportive"), ("es", "Solidario")], &[("en", "Good listener"), ("es", "Sabe escuchar")]]),
];

/// Style label -> one descriptive sentence.
pub const STYLE_SENTENCES: &[(&str, Translations)] = &[
    ("extrovert", &[("en", "You draw energy from being around others and love meeting new people."), ("es", "Te llenas de energía estando con otros y te encanta conocer gente nueva.")]),
    ("ambivert", &[("en", "You enjoy company but also value your time alone."), ("es", "Disfrutas de la compañía, pero también valoras tu tiempo a solas.")]),
    ("introvert", &[("en", "You recharge in quiet moments and prefer a few close friendships."), ("es", "Recargas energía en momentos tranquilos y prefieres pocas amistades cercanas.")]),
    ("analytical", &[("en", "You weigh the facts carefully before deciding."), ("es", "Analizas los hechos con cuidado antes de decidir.")]),
    ("balanced", &[("en", "You mix logic and feeling when making choices."), ("es", "Combinas lógica y sentimiento al tomar decisiones.")]),
    ("creative", &[("en", "You trust your intuition and enjoy fresh ideas."), ("es", "Confías en tu intuición y disfrutas de las ideas nuevas.")]),
    ("active", &[("en", "You are always on the move and love doing things together."), ("es", "Siempre estás en movimiento y te encanta hacer cosas en grupo.")]),
    ("moderate", &[("en", "You keep a steady pace between action and rest."), ("es", "Mantienes un ritmo estable entre la acción y el descanso.")]),
    ("calm", &[("en", "You bring a relaxed, peaceful presence to your friendships."), ("es", "Aportas una presencia relajada y tranquila a tus amistades.")]),
    ("leader", &[("en", "Friends often look to you to take the lead."), ("es", "Tus amigos suelen esperar que tomes la iniciativa.")]),
    ("collaborator", &[("en", "You thrive when everyone works as a team."), ("es", "Te va mejor cuando todos trabajan en equipo.")]),
    ("supporter", &[("en", "You are the friend people count on when they need help."), ("es", "Eres el amigo con quien todos cuentan cuando necesitan ayuda.")]),
];
