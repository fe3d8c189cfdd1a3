use std::fmt;

use serde::{Serialize, Serializer};

/// Product category assigned from the title keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Televisores,
    Parlantes,
    Celulares,
    Laptops,
    Impresoras,
    CocinaAGas,
    Refrigeradoras,
    Frigobares,
    Congeladores,
    Vitrinas,
    Lavadoras,
    Secadoras,
    TorresDeLavado,
    AireAcondicionadoSplit,
    Cafeteras,
    Canguileras,
    HornoMicroondas,
    Freidoras,
    Licuadoras,
    Ollas,
    Exprimidores,
    Sanducheras,
    Planchas,
    Hervidores,
    Otros,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Televisores => "Televisores",
            Category::Parlantes => "Parlantes",
            Category::Celulares => "Celulares",
            Category::Laptops => "Laptops",
            Category::Impresoras => "Impresoras",
            Category::CocinaAGas => "Cocina a gas",
            Category::Refrigeradoras => "Refrigeradoras",
            Category::Frigobares => "Frigobares",
            Category::Congeladores => "Congeladores",
            Category::Vitrinas => "Vitrinas",
            Category::Lavadoras => "Lavadoras",
            Category::Secadoras => "Secadoras",
            Category::TorresDeLavado => "Torres de lavado",
            Category::AireAcondicionadoSplit => "Aire Acondicionado Split",
            Category::Cafeteras => "Cafeteras",
            Category::Canguileras => "Canguileras",
            Category::HornoMicroondas => "Horno Microondas",
            Category::Freidoras => "Freidoras",
            Category::Licuadoras => "Licuadoras",
            Category::Ollas => "Ollas",
            Category::Exprimidores => "Exprimidores",
            Category::Sanducheras => "Sanducheras",
            Category::Planchas => "Planchas",
            Category::Hervidores => "Hervidores",
            Category::Otros => "Otros",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One entry of the rule table.
///
/// A rule matches when the lowercased title contains any of `keywords`
/// and none of `unless`.
struct Rule {
    keywords: &'static [&'static str],
    unless: &'static [&'static str],
    category: Category,
}

impl Rule {
    const fn new(keywords: &'static [&'static str], category: Category) -> Self {
        Self {
            keywords,
            unless: &[],
            category,
        }
    }

    const fn unless(self, unless: &'static [&'static str]) -> Self {
        Self { unless, ..self }
    }

    fn matches(&self, title: &str) -> bool {
        self.keywords.iter().any(|k| title.contains(k))
            && !self.unless.iter().any(|k| title.contains(k))
    }
}

// Evaluated top to bottom, first match wins. Keywords overlap between
// categories, so the order here decides the outcome.
const RULES: &[Rule] = &[
    Rule::new(
        &["televisor", "led", "smart tv", "uhd", "4k", "nanocell"],
        Category::Televisores,
    ),
    Rule::new(
        &[
            "parlante",
            "torre de sonido",
            "barra de sonido",
            "minicomponente",
            "sound bar",
        ],
        Category::Parlantes,
    ),
    Rule::new(
        &["celular", "iphone", "smartphone", "honor", "infinix", "tecno"],
        Category::Celulares,
    ),
    Rule::new(
        &["laptop", "portátil", "notebook", "core i", "ryzen"],
        Category::Laptops,
    ),
    Rule::new(
        &["impresora", "multifunción", "epson", "canon", "brother"],
        Category::Impresoras,
    ),
    Rule::new(
        &[
            "cocina a gas",
            "cocina",
            "hornilla",
            "quemador",
            "indurama",
            "mabe",
        ],
        Category::CocinaAGas,
    )
    .unless(&["microonda"]),
    Rule::new(
        &["refrigeradora", "side by side", "top freezer"],
        Category::Refrigeradoras,
    ),
    Rule::new(&["frigobar"], Category::Frigobares),
    Rule::new(&["congelador", "horizontal"], Category::Congeladores),
    Rule::new(&["vitrina"], Category::Vitrinas),
    Rule::new(
        &["lavadora", "automática", "semiautomática"],
        Category::Lavadoras,
    ),
    Rule::new(&["secadora"], Category::Secadoras),
    Rule::new(&["torre de lavado"], Category::TorresDeLavado),
    Rule::new(
        &["aire acondicionado", "split", "btu"],
        Category::AireAcondicionadoSplit,
    ),
    Rule::new(&["cafetera", "máquina de café"], Category::Cafeteras),
    Rule::new(&["canguilera"], Category::Canguileras),
    Rule::new(&["microonda", "microondas"], Category::HornoMicroondas),
    Rule::new(&["freidora", "airfryer"], Category::Freidoras),
    Rule::new(&["licuadora"], Category::Licuadoras),
    Rule::new(&["olla", "arrocera"], Category::Ollas),
    Rule::new(&["exprimidor", "extractor de jugo"], Category::Exprimidores),
    Rule::new(&["sanduchera", "grill"], Category::Sanducheras),
    Rule::new(&["plancha"], Category::Planchas),
    Rule::new(&["hervidor", "eléctrico"], Category::Hervidores),
];

/// Assign a category to a product title.
///
/// Matching is case-insensitive substring containment. Titles that match
/// no rule fall back to [`Category::Otros`].
pub fn classify(title: &str) -> Category {
    let title = title.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.matches(&title))
        .map(|rule| rule.category)
        .unwrap_or(Category::Otros)
}
