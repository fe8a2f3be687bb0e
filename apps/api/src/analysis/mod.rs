// Draft text analysis. Pure functions only — no completion calls here.

pub mod citations;
