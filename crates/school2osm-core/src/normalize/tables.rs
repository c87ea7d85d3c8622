/// Qualifiers that only restate that the unit is a school; they stay out of
/// the display name.
pub(crate) const FILLER_QUALIFIERS: &[&str] = &[
    "skole",
    "skule",
    "skolen",
    "skulen",
    "avd skule",
    "avd skole",
    "avd undervisning",
    "avdeling skole",
    "avdeling skule",
];

/// Per-word rewrites for school names. An empty replacement drops the word.
pub(crate) const WORD_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("vgs", "videregående skole"),
    ("VGS", "videregående skole"),
    ("Vgs", "videregående skole"),
    ("v.g.s.", "videregående skole"),
    ("V.g.s.", "videregående skole"),
    ("KVS", "kristen videregående skole"),
    ("Kvs", "kristen videregående skole"),
    ("Videregående", "videregående"),
    ("Vidaregåande", "vidaregåande"),
    ("Videregåande", "vidaregåande"),
    ("Vidregående", "videregående"),
    ("Vidregåande", "vidaregåande"),
    ("Bibelskole", "bibelskole"),
    ("Oppvekstsenter", "oppvekstsenter"),
    ("Oppvekstområde", "oppvekstområde"),
    ("Oppveksttun", "oppveksttun"),
    ("Oppvekst", "oppvekstsenter"),
    ("oppvekst", "oppvekstsenter"),
    ("Oahppogald", "oahppogald"),
    ("Grunnskoleundervisning", "grunnskoleundervisning"),
    ("Grunnskolen", "grunnskolen"),
    ("Grunnskole", "grunnskole"),
    ("Grunnskoler", "grunnskoler"),
    ("Grunnskole/adm", "grunnskole"),
    ("Privatskole", "privatskole"),
    ("Privatskule", "privatskule"),
    ("Private", "private"),
    ("Skolen", "skolen"),
    ("Skoler", "skolen"),
    ("Skole", "skole"),
    ("Skule", "skule"),
    ("Skuvle", "skuvle"),
    ("Skuvla", "skuvla"),
    ("Grunn-", "grunn-"),
    ("Barne-", "barne-"),
    ("Barne-Og", "barne- og"),
    ("Barn", "barn"),
    ("Ungdomsskole", "ungdomsskole"),
    ("Ungdomsskule", "ungdomsskule"),
    ("Undomsskule", "ungdomsskule"),
    ("Ungdomssskole", "ungdomsskole"),
    ("Ungdomstrinn", "ungdomstrinn"),
    ("Ungdomstrinnet", "ungdomstrinnet"),
    ("Ungdom", "ungdomsskole"),
    ("Nærmiljøskole", "nærmiljøskole"),
    ("Friskole", "friskole"),
    ("Friskule", "friskule"),
    ("Sentralskole", "sentralskole"),
    ("Sentralskule", "sentralskule"),
    ("Grendaskole", "grendaskole"),
    ("Reindriftsskole", "reindriftsskole"),
    ("Voksenopplæring", "voksenopplæring"),
    ("Morsmålsopplæring", "morsmålsopplæring"),
    ("Opplæring", "opplæring"),
    ("10-Årige", "10-årige"),
    ("Utdanning", "utdanning"),
    ("Kultursenter", "kultursenter"),
    ("Kultur", "kultur"),
    ("Flerbrukssenter", "flerbrukssenter"),
    ("Kristne", "kristne"),
    ("Skolesenter", "skolesenter"),
    ("Læringssenter", "læringssenter"),
    ("Senter", "senter"),
    ("Fengsel", "fengsel"),
    ("Tospråklig", "tospråklig"),
    ("Flerspråklige", "flerspråklige"),
    ("Alternative", "alternative"),
    ("Tekniske", "tekniske"),
    ("Maritime", "maritime"),
    ("Offshore", "offshore"),
    ("Omegn", "omegn"),
    ("Åbarneskole", "Å barneskole"),
    ("lurøy", "Lurøy"),
    ("hasselvika", "Hasselvika"),
    ("tjeldsund", "Tjeldsund"),
    ("Kfskolen", "KFskolen"),
    ("Davinvi", "daVinci"),
    ("masi", "Masi"),
    ("Rkk", "RKK"),
    ("Aib", "AIB"),
    ("(ais)", "(AIS)"),
    ("Awt", "AWT"),
    ("Abr", "ABR"),
    ("Fpg", "FPG"),
    ("Oks", "OKS"),
    ("De", "de"),
    ("Cs", "CS"),
    ("Ii", "II"),
    ("S", "skole"),
    ("St", "St."),
    ("Of", "of"),
    ("Foreningen", ""),
    ("Skolelag", ""),
    ("Stiftelsen", ""),
    ("stiftelsen", ""),
    ("Stiftinga", ""),
    ("Studiested", ""),
    ("Skolested", ""),
    ("Avdeling", ""),
    ("Avd", ""),
    ("Avd.", ""),
    ("avd.", ""),
    ("AS", ""),
    ("As", ""),
    ("SA", ""),
    ("Sa", ""),
    ("BA", ""),
    ("Ba", ""),
    ("ANS", ""),
    ("Ans", ""),
];

/// Substring rewrites applied to the whole name, in order.
pub(crate) const PHRASE_SUBSTITUTIONS: &[(&str, &str)] = &[
    (" og Barnehage", ""),
    (" og barnehage", ""),
    (" og Sfo", ""),
    ("Montessori skole", "Montessoriskole"),
    ("oppvekstsenter skole", "oppvekstsenter"),
    ("oppvekstsenter skule", "oppvekstsenter"),
    ("Nordre Land kommune, ", ""),
    ("Salangen kommune, ", ""),
    ("Kvs-", "Kristen videregående skole "),
    ("Smi-", "SMI-"),
    ("Ntg", "NTG"),
];

/// Per-word rewrites for owner (operator) names.
pub(crate) const OPERATOR_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("Sa", "SA"),
    ("Vgs", "vgs"),
    ("Suohkan", "suohkan"),
    ("Gielda", "gielda"),
    ("Tjïelte", "tjïelte"),
    ("Tjielte", "tjielte"),
    ("Oks", "OKS"),
];

/// First matching replacement for `word`, if the table has one.
pub(crate) fn lookup(table: &[(&'static str, &'static str)], word: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(from, _)| *from == word)
        .map(|(_, to)| *to)
}
