pub mod flyby_geometry;
