//! End-to-end forward model scenarios.

use is_close::is_close;
use littoral_components::parameters::ForwardModelParameters;
use littoral_components::pipeline::ForwardModel;
use littoral_components::reflectance::{Substrate, WaterColumnGeometry};
use littoral_components::siop_models;
use littoral_core::filter::FilterSet;
use littoral_core::siop::{Concentrations, SiopSet, CDOM, CHLOROPHYLL, NAP};
use littoral_core::spectrum::{FloatValue, Spectrum};
use ndarray::{array, Array, Array1};

fn grid() -> Array1<FloatValue> {
    Array::range(400.0, 701.0, 5.0)
}

/// Pure water absorption rising linearly across the grid.
fn water_absorption() -> Spectrum {
    let grid = grid();
    let values = grid.mapv(|w| 0.01 + 0.002 * ((w - 400.0) / 300.0));
    Spectrum::from_values(values, grid).unwrap()
}

/// A SIOP set where only pure water absorbs and nothing backscatters.
fn absorbing_only_siops() -> SiopSet {
    let grid = grid();
    let zero = Spectrum::constant(0.0, &grid).unwrap();
    SiopSet::builder()
        .water_absorption(water_absorption())
        .water_backscatter(zero.clone())
        .specific_absorption(CHLOROPHYLL, zero.clone())
        .specific_absorption(CDOM, zero.clone())
        .specific_absorption(NAP, zero)
        .build()
        .unwrap()
}

fn zero_concentrations() -> Concentrations {
    Concentrations::new()
        .with(CHLOROPHYLL, 0.0)
        .with(CDOM, 0.0)
        .with(NAP, 0.0)
}

fn rgb_filters() -> FilterSet {
    let triangle = |centre: FloatValue| {
        Spectrum::from_values(
            array![0.0, 1.0, 0.0],
            array![centre - 40.0, centre, centre + 40.0],
        )
        .unwrap()
    };
    FilterSet::builder()
        .band("blue", triangle(450.0))
        .band("green", triangle(550.0))
        .band("red", triangle(650.0))
        .build(&grid())
        .unwrap()
}

#[test]
fn clear_water_over_a_flat_substrate() {
    let siops = absorbing_only_siops();
    let substrate_reflectance = 0.1;
    let substrate = Substrate::uniform(Spectrum::constant(substrate_reflectance, &grid()).unwrap());
    let geometry = WaterColumnGeometry::nadir(5.0, 30.0);

    let result = ForwardModel::new()
        .run(&siops, &zero_concentrations(), &substrate, &geometry, None)
        .unwrap();

    // Without constituents the totals are exactly the pure-water spectra
    assert_eq!(
        result.absorption.values(),
        siops.water_absorption().values()
    );
    assert_eq!(
        result.backscatter.values(),
        siops.water_backscatter().values()
    );

    // The water column attenuates the substrate signal: the above-surface
    // reflectance sits strictly between zero and the bottom reflectance
    for &reflectance in result.above_surface_reflectance.values() {
        assert!(
            reflectance > 0.0 && reflectance < substrate_reflectance,
            "above-surface reflectance {} should lie in (0, {})",
            reflectance,
            substrate_reflectance
        );
    }
}

#[test]
fn deep_water_limit_ignores_the_substrate() {
    let siops = siop_models::derived_siop_set(
        water_absorption(),
        Spectrum::constant(0.06, &grid()).unwrap(),
        &ForwardModelParameters::default().siop_model,
    )
    .unwrap();
    let concentrations = Concentrations::new()
        .with(CHLOROPHYLL, 0.5)
        .with(CDOM, 0.02)
        .with(NAP, 0.8);
    let geometry = WaterColumnGeometry::nadir(10_000.0, 30.0);
    let model = ForwardModel::new();

    let dark = Substrate::uniform(Spectrum::constant(0.05, &grid()).unwrap());
    let bright = Substrate::uniform(Spectrum::constant(0.9, &grid()).unwrap());
    let over_dark = model
        .run(&siops, &concentrations, &dark, &geometry, None)
        .unwrap();
    let over_bright = model
        .run(&siops, &concentrations, &bright, &geometry, None)
        .unwrap();

    for i in 0..grid().len() {
        let rrs = over_dark.subsurface_reflectance.values()[i];
        let rrs_deep = over_dark.deep_subsurface_reflectance.values()[i];
        assert!(
            is_close!(rrs, rrs_deep, abs_tol = 1e-6),
            "at depth 10 km the shallow correction should vanish: {} vs {}",
            rrs,
            rrs_deep
        );
        assert!(
            is_close!(
                rrs,
                over_bright.subsurface_reflectance.values()[i],
                abs_tol = 1e-6
            ),
            "the substrate should not matter in the deep-water limit"
        );
    }
}

#[test]
fn band_convolution_of_a_flat_spectrum_reads_the_flat_value() {
    // Convolution identity, checked through the sensor stage directly:
    // the model never produces an exactly flat spectrum
    let value = 0.37;
    let flat = Spectrum::constant(value, &grid()).unwrap();
    let bands = littoral_components::sensor::convolve(&flat, &rgb_filters()).unwrap();

    assert_eq!(bands.len(), 3);
    for (name, band_value) in &bands {
        assert!(
            is_close!(*band_value, value, abs_tol = 1e-12),
            "band {} should read {} for a flat spectrum, got {}",
            name,
            value,
            band_value
        );
    }
}

#[test]
fn pipeline_produces_band_values_when_filters_are_supplied() {
    let siops = siop_models::derived_siop_set(
        water_absorption(),
        Spectrum::constant(0.06, &grid()).unwrap(),
        &ForwardModelParameters::default().siop_model,
    )
    .unwrap();
    let concentrations = Concentrations::new()
        .with(CHLOROPHYLL, 0.3)
        .with(CDOM, 0.01)
        .with(NAP, 0.5);
    let substrate = Substrate::uniform(Spectrum::constant(0.25, &grid()).unwrap());
    let geometry = WaterColumnGeometry::new(3.0, 25.0, 5.0);
    let filters = rgb_filters();

    let result = ForwardModel::new()
        .run(
            &siops,
            &concentrations,
            &substrate,
            &geometry,
            Some(&filters),
        )
        .unwrap();

    let bands = result.band_reflectance.as_ref().expect("bands requested");
    assert_eq!(bands.len(), 3);
    let (min, max) = result.above_surface_reflectance.values().iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), &v| (min.min(v), max.max(v)),
    );
    for (name, &value) in bands {
        assert!(
            value >= min && value <= max,
            "band {} value {} should lie within the spectrum's range [{}, {}]",
            name,
            value,
            min,
            max
        );
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let siops = siop_models::derived_siop_set(
        water_absorption(),
        Spectrum::constant(0.06, &grid()).unwrap(),
        &ForwardModelParameters::default().siop_model,
    )
    .unwrap();
    let concentrations = Concentrations::new()
        .with(CHLOROPHYLL, 1.1)
        .with(CDOM, 0.08)
        .with(NAP, 2.3);
    let substrate = Substrate::mixed(
        Spectrum::constant(0.3, &grid()).unwrap(),
        Spectrum::constant(0.12, &grid()).unwrap(),
        0.6,
    )
    .unwrap();
    let geometry = WaterColumnGeometry::new(2.5, 40.0, 15.0);
    let filters = rgb_filters();
    let model = ForwardModel::new();

    let first = model
        .run(
            &siops,
            &concentrations,
            &substrate,
            &geometry,
            Some(&filters),
        )
        .unwrap();
    let second = model
        .run(
            &siops,
            &concentrations,
            &substrate,
            &geometry,
            Some(&filters),
        )
        .unwrap();

    assert_eq!(first.absorption.values(), second.absorption.values());
    assert_eq!(first.backscatter.values(), second.backscatter.values());
    assert_eq!(
        first.subsurface_reflectance.values(),
        second.subsurface_reflectance.values()
    );
    assert_eq!(
        first.above_surface_reflectance.values(),
        second.above_surface_reflectance.values()
    );
    assert_eq!(first.band_reflectance, second.band_reflectance);
}
