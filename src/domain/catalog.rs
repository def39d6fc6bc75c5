use crate::domain::model::{Master, Service};

const HAIRCUTS: &str = "Haircuts";
const COLOURING: &str = "Colouring";
const STYLING: &str = "Styling";

const SERVICES: &[(u32, &str, &str, u32, f64)] = &[
    (1, HAIRCUTS, "Women's haircut (wash and styling included)", 60, 1500.0),
    (2, HAIRCUTS, "Men's haircut (wash and styling included)", 45, 1000.0),
    (3, HAIRCUTS, "Children's haircut (under 10)", 30, 700.0),
    (4, HAIRCUTS, "Fringe trim", 15, 300.0),
    (5, HAIRCUTS, "Creative / model haircut", 75, 1800.0),
    (6, HAIRCUTS, "Clipper cut", 20, 500.0),
    (7, HAIRCUTS, "Tip trim", 20, 600.0),
    (8, COLOURING, "Single-tone colouring", 90, 2500.0),
    (9, COLOURING, "Toning", 60, 1500.0),
    (10, COLOURING, "Highlights (classic, shatush, balayage, ombre)", 150, 4000.0),
    (11, COLOURING, "Multi-tone colouring", 120, 3500.0),
    (12, COLOURING, "Pre-pigmentation / colour restoration", 90, 2200.0),
    (13, COLOURING, "Colour removal", 60, 1500.0),
    (14, COLOURING, "Root colouring", 75, 1800.0),
    (15, COLOURING, "AIRTOUCH", 180, 5000.0),
    (16, STYLING, "Blow-dry / brushing", 40, 900.0),
    (17, STYLING, "Roller set", 45, 1000.0),
    (18, STYLING, "Evening / wedding hairstyle", 120, 4000.0),
    (19, STYLING, "Glamour curls / Hollywood waves", 60, 2000.0),
    (20, STYLING, "Braiding (various techniques)", 45, 1200.0),
    (21, STYLING, "Straightening style", 45, 1000.0),
];

const MASTERS: &[(u32, &str)] = &[
    (1, "Anna"),
    (2, "Olga"),
    (3, "Maria"),
    (4, "Dmitry"),
    (5, "Sergey"),
];

pub fn default_services() -> Vec<Service> {
    SERVICES
        .iter()
        .map(|&(id, category, name, duration_min, price)| Service {
            id,
            category: category.to_string(),
            name: name.to_string(),
            duration_min,
            price,
        })
        .collect()
}

pub fn default_masters() -> Vec<Master> {
    MASTERS
        .iter()
        .map(|&(id, name)| Master {
            id,
            name: name.to_string(),
        })
        .collect()
}
