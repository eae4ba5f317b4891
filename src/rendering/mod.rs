pub mod blip_visuals;
pub mod outline_tint;
