//! Built-in run description: future surface ozone change over the AR6
//! regions, CMIP6 multi-model mean with a TM5-FASST overlay.

use std::path::PathBuf;

use super::{JobConfig, LineStyle, ReferenceConfig, Region, Scenario, TimeAxis};

fn region(name: &str, code: u8, color: &str) -> Region {
    Region {
        name: name.to_string(),
        code,
        color: color.to_string(),
    }
}

impl JobConfig {
    /// The CMIP6 surface-ozone comparison job: SSP scenarios 2015-2100
    /// against a 2005-14 baseline, decadal TM5-FASST reference overlay.
    pub fn cmip6_surface_ozone() -> Self {
        let regions = vec![
            region("Africa", 3, "wheat"),
            region("Asia-Pacific Developed", 7, "purple"),
            region("Eastern Asia", 10, "red"),
            region("Europe", 2, "blue"),
            region("Eurasia", 6, "darkorange"),
            region("Latin America and Carribean", 5, "maroon"),
            region("Middle East", 8, "cyan"),
            region("North America", 9, "gold"),
            region("Southern Asia", 1, "plum"),
            region("South-East Asia and Developing Pacific", 4, "lightgreen"),
        ];

        // IPCC scenario colours; the three ssp370 variants share a colour
        // and differ by line style.
        let scenarios = vec![
            Scenario {
                id: "ssp126".to_string(),
                label: "ssp126".to_string(),
                color: [29, 51, 84],
                style: LineStyle::Solid,
                mask_zero: false,
            },
            Scenario {
                id: "ssp245".to_string(),
                label: "ssp245".to_string(),
                color: [234, 221, 61],
                style: LineStyle::Solid,
                mask_zero: false,
            },
            Scenario {
                id: "ssp370".to_string(),
                label: "ssp370".to_string(),
                color: [242, 17, 17],
                style: LineStyle::Solid,
                mask_zero: false,
            },
            Scenario {
                id: "ssp370-lowNTCF".to_string(),
                label: "ssp370-lowSLCF-highCH4".to_string(),
                color: [242, 17, 17],
                style: LineStyle::Dashed,
                // Zero entries mean the scenario was not run for that
                // year; drop them rather than plotting a false dip.
                mask_zero: true,
            },
            Scenario {
                id: "ssp370-lowNTCFCH4".to_string(),
                label: "ssp370-lowSLCF-lowCH4".to_string(),
                color: [242, 17, 17],
                style: LineStyle::Dotted,
                mask_zero: false,
            },
            Scenario {
                id: "ssp585".to_string(),
                label: "ssp585".to_string(),
                color: [132, 11, 34],
                style: LineStyle::Solid,
                mask_zero: false,
            },
        ];

        let reference = Some(ReferenceConfig {
            label: "TM5-FASST".to_string(),
            file: "Regional_annual_mean_surface_O3_resp_values_CMIP6_Fut_Scens_from_TM5_FASST_on_AR6_reg_receptors_INCL_GLOB_2015_2100.txt"
                .to_string(),
            scenarios: vec![
                "ssp126".to_string(),
                "ssp245".to_string(),
                "ssp370".to_string(),
                "ssp370-lowNTCFCH4".to_string(),
                "ssp585".to_string(),
            ],
            years: TimeAxis::new(vec![
                2015, 2020, 2030, 2040, 2050, 2060, 2070, 2080, 2090, 2100,
            ]),
        });

        JobConfig {
            species: "O3".to_string(),
            species_label: "Ozone".to_string(),
            units_label: "(ppb)".to_string(),
            regions,
            scenarios,
            years: TimeAxis::annual(2015, 2100),
            reference,
            data_dir: PathBuf::from("data"),
            plot_dir: PathBuf::from("plots"),
            baseline_file: "Surf_O3_data_05_14_mean_for_IPCC_figure_V1_5mods.csv".to_string(),
            mean_file: "Surf_O3_data_fut_mean_for_IPCC_figure_V1_5mods.csv".to_string(),
            sd_file: "Surf_O3_SD_data_fut_mean_for_IPCC_figure_V1_5mods.csv".to_string(),
        }
    }
}
