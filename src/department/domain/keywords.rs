//! Keyword table mapping department keys to the vocabulary that signals them.
//!
//! The table is plain data. Adding a department or a keyword is a data
//! change, never a new branch in the scoring code.

use super::{NormalizedText, department_key, normalize_phrase};

/// Points awarded for an exact word or phrase hit.
const EXACT_MATCH_POINTS: u32 = 2;

/// Points awarded when only the naive singular/plural form of a word hits.
const NEAR_MATCH_POINTS: u32 = 1;

/// Built-in vocabulary, keyed by normalized department name.
const BUILTIN_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "ti",
        &[
            "ti",
            "tecnologia",
            "informatica",
            "computador",
            "computadores",
            "pc",
            "impressora",
            "impressoras",
            "rede",
            "servidor",
            "servidores",
            "sistema",
            "sistemas",
            "software",
            "hardware",
            "acesso",
            "senha",
            "senhas",
            "login",
            "vpn",
            "email",
            "emails",
            "periferico",
            "perifericos",
            "bug",
            "erro",
            "crash",
            "update",
            "atualizacao",
            "licenca",
        ],
    ),
    (
        "financeiro",
        &[
            "financeiro",
            "pagamento",
            "pagamentos",
            "fatura",
            "faturas",
            "faturamento",
            "boleto",
            "boletos",
            "nota fiscal",
            "nf",
            "reembolso",
            "custos",
            "orcamento",
            "contabil",
            "contabilidade",
            "receber",
            "pagar",
            "tributo",
            "imposto",
        ],
    ),
    (
        "rh",
        &[
            "rh",
            "recursos humanos",
            "folha",
            "folha pagamento",
            "beneficio",
            "beneficios",
            "ferias",
            "admissao",
            "demissao",
            "colaborador",
            "colaboradores",
            "funcionario",
            "funcionarios",
            "holerite",
            "ponto",
            "cartao ponto",
            "vale",
            "recrutamento",
        ],
    ),
    (
        "producao",
        &[
            "producao",
            "linha producao",
            "linha",
            "maquina",
            "maquinas",
            "equipamento",
            "equipamentos",
            "manutencao",
            "manutencoes",
            "operacao",
            "operacoes",
            "chao fabrica",
            "fabrica",
            "industrial",
            "estoque",
            "insumo",
            "insumos",
            "materia prima",
        ],
    ),
];

/// A normalized keyword, tagged by how it is matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// Single word, matched against the token set.
    Word(String),
    /// Multi-word phrase, matched as a substring of the flattened text.
    Phrase(String),
}

impl Keyword {
    /// Normalizes a raw keyword and tags it.
    ///
    /// Returns `None` when nothing is left after normalization.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize_phrase(raw);
        if normalized.is_empty() {
            None
        } else if normalized.contains(' ') {
            Some(Self::Phrase(normalized))
        } else {
            Some(Self::Word(normalized))
        }
    }

    /// Returns the normalized keyword text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Word(text) | Self::Phrase(text) => text,
        }
    }

    /// Scores this keyword against normalized ticket text.
    ///
    /// Phrases score on a substring hit. Words score fully on an exact token
    /// and partially when only the naive plural (or, for words already
    /// ending in `s`, the singular) is present.
    #[must_use]
    pub fn score(&self, text: &NormalizedText) -> u32 {
        match self {
            Self::Phrase(phrase) => {
                if text.contains_phrase(phrase) {
                    EXACT_MATCH_POINTS
                } else {
                    0
                }
            }
            Self::Word(word) => {
                if text.has_token(word) {
                    return EXACT_MATCH_POINTS;
                }
                let variant_present = word.strip_suffix('s').map_or_else(
                    || text.has_token(&format!("{word}s")),
                    |singular| text.has_token(singular),
                );
                if variant_present { NEAR_MATCH_POINTS } else { 0 }
            }
        }
    }
}

/// Keywords registered for one department key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentKeywords {
    key: String,
    keywords: Vec<Keyword>,
}

impl DepartmentKeywords {
    /// Returns the normalized department key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the keywords in registration order.
    #[must_use]
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// Sums the scores of every keyword against `text`.
    #[must_use]
    pub fn score(&self, text: &NormalizedText) -> u32 {
        self.keywords.iter().map(|keyword| keyword.score(text)).sum()
    }
}

/// Ordered mapping from department key to keyword entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable {
    entries: Vec<DepartmentKeywords>,
}

impl KeywordTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the built-in table covering `ti`, `financeiro`, `rh` and
    /// `producao`.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_KEYWORDS
            .iter()
            .fold(Self::new(), |table, (key, keywords)| {
                table.with_department(key, keywords.iter().copied())
            })
    }

    /// Registers keywords for a department.
    ///
    /// The department name is folded into its key; keywords registered for
    /// an existing key extend its list. Keywords that normalize to nothing
    /// are skipped.
    #[must_use]
    pub fn with_department<I, S>(mut self, department: &str, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = department_key(department);
        let parsed = keywords
            .into_iter()
            .filter_map(|raw| Keyword::parse(raw.as_ref()));
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            entry.keywords.extend(parsed);
        } else {
            self.entries.push(DepartmentKeywords {
                key,
                keywords: parsed.collect(),
            });
        }
        self
    }

    /// Looks up the entry for a normalized department key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DepartmentKeywords> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Returns every registered department key in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(DepartmentKeywords::key)
    }
}
