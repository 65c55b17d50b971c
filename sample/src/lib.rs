use cdconsts::*;
use itertools::Itertools;
use lattice::Lattice;
use vector3::*;

// Physical system container.
//
// Coordinates:
// - lattice vectors stored in Bohr
// - atomic positions stored in fractional coordinates
// - helper conversions provide Cartesian views when needed
#[derive(Debug, Default)]
pub struct Sample {
    latt: Lattice,
    atom_species: Vec<String>,
    atom_positions: Vec<Vector3f64>,
    atom_indices_by_specie: Vec<Vec<usize>>,
}

impl Sample {
    pub fn new(latt: Lattice, atom_species: Vec<String>, atom_positions: Vec<Vector3f64>) -> Sample {
        assert_eq!(atom_species.len(), atom_positions.len());

        // Build specie -> atom-index lookup for fast grouped operations.

        let unique_species: Vec<String> = atom_species.clone().into_iter().unique().collect();

        let nsp = unique_species.len();

        let mut atom_indices_by_specie = vec![Vec::new(); nsp];

        for (at_index, at_symbol) in atom_species.iter().enumerate() {
            for (isp, sp) in unique_species.iter().enumerate() {
                if *sp == *at_symbol {
                    atom_indices_by_specie[isp].push(at_index);
                }
            }
        }

        Sample {
            latt,
            atom_species,
            atom_positions,
            atom_indices_by_specie,
        }
    }

    pub fn get_omega(&self) -> f64 {
        self.latt.volume()
    }

    pub fn get_latt(&self) -> &Lattice {
        &self.latt
    }

    pub fn get_n_atoms(&self) -> usize {
        self.atom_positions.len()
    }

    pub fn get_atom_species(&self) -> &[String] {
        &self.atom_species
    }

    pub fn get_atom_positions(&self) -> &[Vector3f64] {
        &self.atom_positions
    }

    pub fn get_atom_positions_cart(&self) -> Vec<Vector3f64> {
        // Convert all fractional atomic positions to Cartesian coordinates.
        let natoms = self.atom_positions.len();

        let mut atoms_cart = vec![Vector3f64::zeros(); natoms];

        for iat in 0..natoms {
            self.latt.frac_to_cart(
                self.atom_positions[iat].as_slice(),
                atoms_cart[iat].as_mut_slice(),
            );
        }

        atoms_cart
    }

    pub fn get_unique_species(&self) -> Vec<String> {
        // Preserve first-occurrence order while removing duplicates.
        self.atom_species.clone().into_iter().unique().collect()
    }

    pub fn get_n_unique_species(&self) -> usize {
        self.atom_indices_by_specie.len()
    }

    pub fn get_atom_indices_of_specie(&self, isp: usize) -> &[usize] {
        &self.atom_indices_by_specie[isp]
    }

    pub fn display(&self) {
        println!("   {:-^88}", " sample ");
        println!();

        println!("   lattice_vectors");
        println!();

        let vec_a = self.latt.get_vector_a();
        println!(
            "   a = {:20.12}  {:20.12}  {:20.12}",
            vec_a.x * BOHR_TO_ANG,
            vec_a.y * BOHR_TO_ANG,
            vec_a.z * BOHR_TO_ANG
        );

        let vec_b = self.latt.get_vector_b();
        println!(
            "   b = {:20.12}  {:20.12}  {:20.12}",
            vec_b.x * BOHR_TO_ANG,
            vec_b.y * BOHR_TO_ANG,
            vec_b.z * BOHR_TO_ANG
        );

        let vec_c = self.latt.get_vector_c();
        println!(
            "   c = {:20.12}  {:20.12}  {:20.12}",
            vec_c.x * BOHR_TO_ANG,
            vec_c.y * BOHR_TO_ANG,
            vec_c.z * BOHR_TO_ANG
        );

        println!();
        println!("   omega  = {:20.12} (Bohr^3)", self.get_omega());
        println!("   natoms = {}", self.get_n_atoms());
        println!("   atom_positions\n");
        println!("                fractional                                                cartesian (A)");
        println!();

        for (i, atom) in self.get_atom_positions().iter().enumerate() {
            let mut pos_c = Vector3f64::zeros();

            self.latt
                .frac_to_cart(atom.as_slice(), pos_c.as_mut_slice());

            println!(
                "   {:<3} {:>4} : {:16.12}  {:16.12}  {:16.12}  {:20.12}  {:20.12}  {:20.12}",
                i + 1,
                self.atom_species[i],
                atom.x,
                atom.y,
                atom.z,
                pos_c.x * BOHR_TO_ANG,
                pos_c.y * BOHR_TO_ANG,
                pos_c.z * BOHR_TO_ANG
            );
        }

        println!();

        for (isp, sp) in self.get_unique_species().iter().enumerate() {
            println!(
                "   {} : {:?}",
                sp,
                self.get_atom_indices_of_specie(isp)
                    .iter()
                    .map(|x| x + 1)
                    .collect::<Vec<usize>>()
            );
        }
    }
}

#[test]
fn test_sample() {
    let a = 4.0;

    let latt = Lattice::new(&[a, 0.0, 0.0], &[0.0, a, 0.0], &[0.0, 0.0, a]);

    let species = vec!["Si".to_string(), "O".to_string(), "Si".to_string()];

    let positions = vec![
        Vector3f64::new(0.0, 0.0, 0.0),
        Vector3f64::new(0.5, 0.5, 0.5),
        Vector3f64::new(0.25, 0.25, 0.25),
    ];

    let sample = Sample::new(latt, species, positions);

    assert_eq!(sample.get_omega(), a * a * a);
    assert_eq!(sample.get_n_atoms(), 3);
    assert_eq!(sample.get_unique_species(), vec!["Si", "O"]);
    assert_eq!(sample.get_n_unique_species(), 2);
    assert_eq!(sample.get_atom_indices_of_specie(0), &[0, 2]);
    assert_eq!(sample.get_atom_indices_of_specie(1), &[1]);

    let cart = sample.get_atom_positions_cart();
    assert!((cart[1].x - 2.0).abs() < EPS12);
    assert!((cart[2].z - 1.0).abs() < EPS12);

    sample.display();
}
