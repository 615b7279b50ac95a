use super::{Product, StoreId};
use std::collections::BTreeMap;

/// One built-in staple with its per-store shelf prices.
struct StapleRow {
    name: &'static str,
    alt_names: &'static [&'static str],
    unit: &'static str,
    kaufland: f64,
    lidl: f64,
    aldi: f64,
}

pub(super) fn staple_products() -> Vec<Product> {
    STAPLES
        .iter()
        .map(|row| {
            let mut prices = BTreeMap::new();
            prices.insert(StoreId::Kaufland, row.kaufland);
            prices.insert(StoreId::Lidl, row.lidl);
            prices.insert(StoreId::Aldi, row.aldi);
            Product {
                canonical_name: row.name.to_string(),
                alt_names: row.alt_names.iter().map(|name| name.to_string()).collect(),
                unit: row.unit.to_string(),
                category: None,
                prices,
            }
        })
        .collect()
}

/// Common German grocery staples with representative prices. The alt names
/// carry the English synonyms shoppers actually type.
const STAPLES: &[StapleRow] = &[
    StapleRow { name: "milch 1l", alt_names: &["milk", "vollmilch"], unit: "1 l", kaufland: 1.05, lidl: 0.99, aldi: 1.09 },
    StapleRow { name: "butter 250g", alt_names: &[], unit: "250 g", kaufland: 2.19, lidl: 2.09, aldi: 2.05 },
    StapleRow { name: "eier 10er", alt_names: &["eggs"], unit: "10 stk", kaufland: 2.29, lidl: 2.19, aldi: 2.25 },
    StapleRow { name: "kartoffeln 2,5kg", alt_names: &["potatoes"], unit: "2,5 kg", kaufland: 3.49, lidl: 3.39, aldi: 3.29 },
    StapleRow { name: "zwiebeln 1kg", alt_names: &["onions"], unit: "1 kg", kaufland: 0.99, lidl: 0.95, aldi: 0.89 },
    StapleRow { name: "bananen", alt_names: &["bananas"], unit: "per kg", kaufland: 0.85, lidl: 0.88, aldi: 0.89 },
    StapleRow { name: "äpfel 1kg", alt_names: &["apples"], unit: "1 kg", kaufland: 1.49, lidl: 1.59, aldi: 1.39 },
    StapleRow { name: "paprika mix 500g", alt_names: &[], unit: "500 g", kaufland: 1.99, lidl: 1.89, aldi: 1.95 },
    StapleRow { name: "tomaten 1kg", alt_names: &["tomato"], unit: "1 kg", kaufland: 2.49, lidl: 2.39, aldi: 2.29 },
    StapleRow { name: "gurke", alt_names: &["cucumber"], unit: "stk", kaufland: 0.79, lidl: 0.69, aldi: 0.75 },
    StapleRow { name: "brot", alt_names: &["bread"], unit: "750 g", kaufland: 1.49, lidl: 1.39, aldi: 1.29 },
    StapleRow { name: "brötchen 5stk", alt_names: &["rolls"], unit: "5 stk", kaufland: 1.49, lidl: 1.39, aldi: 1.29 },
    StapleRow { name: "joghurt natur 500g", alt_names: &["yoghurt"], unit: "500 g", kaufland: 0.99, lidl: 0.95, aldi: 0.89 },
    StapleRow { name: "quark 250g", alt_names: &[], unit: "250 g", kaufland: 0.79, lidl: 0.69, aldi: 0.75 },
    StapleRow { name: "käse scheiben 150g", alt_names: &["cheese"], unit: "150 g", kaufland: 1.49, lidl: 1.39, aldi: 1.45 },
    StapleRow { name: "frischkäse 200g", alt_names: &[], unit: "200 g", kaufland: 1.19, lidl: 1.09, aldi: 1.15 },
    StapleRow { name: "schnittkäse 250g", alt_names: &[], unit: "250 g", kaufland: 2.19, lidl: 2.09, aldi: 2.05 },
    StapleRow { name: "wurstaufschnitt 200g", alt_names: &[], unit: "200 g", kaufland: 1.99, lidl: 1.79, aldi: 1.89 },
    StapleRow { name: "schinken gekocht 200g", alt_names: &["ham"], unit: "200 g", kaufland: 2.29, lidl: 2.19, aldi: 2.15 },
    StapleRow { name: "hackfleisch gemischt 500g", alt_names: &["minced meat"], unit: "500 g", kaufland: 4.49, lidl: 4.29, aldi: 4.39 },
    StapleRow { name: "hähnchenbrust 1kg", alt_names: &["chicken breast"], unit: "1 kg", kaufland: 7.99, lidl: 7.79, aldi: 7.49 },
    StapleRow { name: "lachsfilet tk 300g", alt_names: &["salmon"], unit: "300 g", kaufland: 4.49, lidl: 4.29, aldi: 4.39 },
    StapleRow { name: "fischstäbchen 15stk", alt_names: &["fish fingers"], unit: "390-450 g", kaufland: 2.99, lidl: 2.79, aldi: 2.89 },
    StapleRow { name: "tiefkühl pizza", alt_names: &["pizza"], unit: "stk", kaufland: 2.49, lidl: 2.29, aldi: 2.39 },
    StapleRow { name: "nudeln 500g", alt_names: &["pasta"], unit: "500 g", kaufland: 0.99, lidl: 0.95, aldi: 0.89 },
    StapleRow { name: "reis 1kg", alt_names: &["rice"], unit: "1 kg", kaufland: 1.99, lidl: 1.89, aldi: 1.79 },
    StapleRow { name: "mehl 1kg", alt_names: &["flour"], unit: "1 kg", kaufland: 0.89, lidl: 0.85, aldi: 0.79 },
    StapleRow { name: "zucker 1kg", alt_names: &["sugar"], unit: "1 kg", kaufland: 0.99, lidl: 0.95, aldi: 0.89 },
    StapleRow { name: "salz 500g", alt_names: &["salt"], unit: "500 g", kaufland: 0.39, lidl: 0.35, aldi: 0.39 },
    StapleRow { name: "sonnenblumenöl 1l", alt_names: &["sunflower oil"], unit: "1 l", kaufland: 2.59, lidl: 2.49, aldi: 2.39 },
    StapleRow { name: "olivenöl 1l", alt_names: &["olive oil"], unit: "1 l", kaufland: 5.99, lidl: 5.79, aldi: 5.49 },
    StapleRow { name: "kaffee 500g", alt_names: &["coffee"], unit: "500 g", kaufland: 5.49, lidl: 5.29, aldi: 5.19 },
    StapleRow { name: "tee schwarz 25 beutel", alt_names: &["black tea"], unit: "25 beutel", kaufland: 1.29, lidl: 1.19, aldi: 1.25 },
    StapleRow { name: "mineralwasser still 1,5l", alt_names: &["water"], unit: "1,5 l", kaufland: 0.45, lidl: 0.39, aldi: 0.39 },
    StapleRow { name: "cola 1,25l", alt_names: &[], unit: "1,25 l", kaufland: 1.29, lidl: 1.25, aldi: 1.19 },
    StapleRow { name: "saft orange 1l", alt_names: &["orange juice"], unit: "1 l", kaufland: 1.49, lidl: 1.39, aldi: 1.29 },
    StapleRow { name: "schokolade tafel 100g", alt_names: &["chocolate", "choclet"], unit: "100 g", kaufland: 0.99, lidl: 0.89, aldi: 0.95 },
    StapleRow { name: "müsli 500g", alt_names: &["muesli"], unit: "500 g", kaufland: 2.29, lidl: 2.09, aldi: 1.99 },
    StapleRow { name: "haferflocken 500g", alt_names: &["oats"], unit: "500 g", kaufland: 0.99, lidl: 0.89, aldi: 0.85 },
    StapleRow { name: "tomatenmark 200g", alt_names: &["tomato paste"], unit: "200 g", kaufland: 0.89, lidl: 0.79, aldi: 0.79 },
    StapleRow { name: "passierte tomaten 500g", alt_names: &[], unit: "500 g", kaufland: 0.99, lidl: 0.89, aldi: 0.85 },
    StapleRow { name: "dosentomaten 400g", alt_names: &["canned tomatoes"], unit: "400 g", kaufland: 0.89, lidl: 0.79, aldi: 0.75 },
    StapleRow { name: "mais dose 340g", alt_names: &["corn"], unit: "340 g", kaufland: 0.99, lidl: 0.89, aldi: 0.85 },
    StapleRow { name: "erbsen dose 400g", alt_names: &["peas"], unit: "400 g", kaufland: 0.99, lidl: 0.89, aldi: 0.85 },
    StapleRow { name: "spinat tk 450g", alt_names: &["spinach"], unit: "450 g", kaufland: 1.29, lidl: 1.19, aldi: 1.15 },
    StapleRow { name: "pommes tk 1kg", alt_names: &["fries"], unit: "1 kg", kaufland: 2.19, lidl: 1.99, aldi: 1.95 },
    StapleRow { name: "waschmittel 20 wäschen", alt_names: &["detergent"], unit: "1 stk", kaufland: 3.99, lidl: 3.79, aldi: 3.69 },
    StapleRow { name: "toilettenpapier 8 rollen", alt_names: &["toilet paper"], unit: "8 rollen", kaufland: 3.49, lidl: 3.29, aldi: 3.19 },
    StapleRow { name: "pampers feuchttücher", alt_names: &["wet wipes"], unit: "pkt", kaufland: 1.99, lidl: 1.89, aldi: 1.79 },
    StapleRow { name: "brotaufstrich nutella 450g", alt_names: &[], unit: "450 g", kaufland: 3.29, lidl: 3.19, aldi: 3.09 },
    StapleRow { name: "biskuit / kekse 200g", alt_names: &["biscuits"], unit: "200 g", kaufland: 1.19, lidl: 1.09, aldi: 1.05 },
];
