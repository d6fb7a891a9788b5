use openskill_processor::model::{rate, Model, Options};

use crate::common::{assert_teams_eq, fixture_teams, init_test_env, tied_teams};

#[test]
fn test_plackett_luce() {
    init_test_env();

    let result = rate(&fixture_teams(), &Options::default()).unwrap();

    assert_teams_eq(
        &result,
        &[
            &[(30.209971908310553, 4.764898977359521)],
            &[(27.64460833689499, 4.882789305097372)],
            &[(17.403586731283518, 6.100723440599442)],
            &[(19.214790707434826, 7.8542613981643985)]
        ]
    );
}

#[test]
fn test_bradley_terry_full() {
    init_test_env();

    let options = Options::default().with_model(Model::BradleyTerryFull);
    let result = rate(&fixture_teams(), &options).unwrap();

    assert_teams_eq(
        &result,
        &[
            &[(31.643721109067318, 4.5999011726035866)],
            &[(27.579203181313282, 4.711537319421646)],
            &[(16.96606210683349, 5.824625458553909)],
            &[(15.834345097607386, 7.1129977453618745)]
        ]
    );
}

#[test]
fn test_bradley_terry_part() {
    init_test_env();

    let options = Options::default().with_model(Model::BradleyTerryPart);
    let result = rate(&fixture_teams(), &options).unwrap();

    assert_teams_eq(
        &result,
        &[
            &[(30.306332521413296, 4.6939418263671095)],
            &[(26.612428344417093, 4.763449359372897)],
            &[(17.826406858593096, 5.967016727253254)],
            &[(21.121239962210936, 8.013642065838967)]
        ]
    );
}

#[test]
fn test_thurstone_mosteller_full() {
    init_test_env();

    let options = Options::default().with_model(Model::ThurstoneMostellerFull);
    let result = rate(&fixture_teams(), &options).unwrap();

    assert_teams_eq(
        &result,
        &[
            &[(32.48679691695746, 4.3777704245427795)],
            &[(27.50365225321486, 4.439639500327343)],
            &[(19.026382885346386, 5.3168550585733545)],
            &[(9.788867480963903, 4.44499502386533)]
        ]
    );
}

#[test]
fn test_thurstone_mosteller_part() {
    init_test_env();

    let options = Options::default().with_model(Model::ThurstoneMostellerPart);
    let result = rate(&fixture_teams(), &options).unwrap();

    assert_teams_eq(
        &result,
        &[
            &[(30.10299190336822, 4.754907766615836)],
            &[(26.802890817149226, 4.872206360151886)],
            &[(17.376483221036136, 6.128846033073613)],
            &[(22.00116239989508, 8.207768901343528)]
        ]
    );
}

#[test]
fn test_tied_teams_plackett_luce() {
    init_test_env();

    let options = Options::default().with_rankings(vec![2, 1, 2, 3]);
    let result = rate(&tied_teams(), &options).unwrap();

    assert_teams_eq(
        &result,
        &[
            &[(23.64318949776717, 8.052307033753664), (29.687365850053776, 3.969359408962287)],
            &[(28.62530775544705, 5.96599906798289), (23.128685941282672, 4.980340637170851)],
            &[(21.172380502788055, 6.975092574334365)],
            &[(30.554194576093348, 2.9949728451251962), (23.801864256041487, 1.9985111664875108)]
        ]
    );
}

#[test]
fn test_tied_teams_bradley_terry() {
    init_test_env();

    let options = Options::default().with_rankings(vec![2, 1, 2, 3]);
    let full = rate(&tied_teams(), &options.clone().with_model(Model::BradleyTerryFull)).unwrap();
    let part = rate(&tied_teams(), &options.with_model(Model::BradleyTerryPart)).unwrap();

    assert_teams_eq(
        &full,
        &[
            &[(22.53318771715977, 7.525497496342987), (29.431600979021372, 3.9140908700018753)],
            &[(31.086752685578794, 5.7022382475276805), (24.838022698318607, 4.829037094795269)],
            &[(26.153382287015376, 6.880440104512487)],
            &[(29.167823204780507, 2.980749256626596), (23.18569920212467, 1.994306272199514)]
        ]
    );
    assert_teams_eq(
        &part,
        &[
            &[(19.524451854395984, 7.992763478724897), (28.738332775893575, 3.962964853341625)],
            &[(28.630571664551166, 5.917102284813136), (23.13234143371609, 4.95212902802178)],
            &[(26.48886889020818, 6.9332595309927685)],
            &[(30.110211835955266, 2.9986222883152047), (23.604538593757894, 1.9995918412148468)]
        ]
    );
}

#[test]
fn test_tied_teams_thurstone_mosteller() {
    init_test_env();

    let options = Options::default().with_rankings(vec![2, 1, 2, 3]);
    let full = rate(&tied_teams(), &options.clone().with_model(Model::ThurstoneMostellerFull)).unwrap();
    let part = rate(&tied_teams(), &options.with_model(Model::ThurstoneMostellerPart)).unwrap();

    assert_teams_eq(
        &full,
        &[
            &[(9.75065454987028, 4.184542321184644), (26.48626971548932, 3.639090324395539)],
            &[(34.14418865485035, 5.1040000962736025), (26.961242121423858, 4.494660808401616)],
            &[(49.01587653449093, 4.915065479821494)],
            &[(25.860979410907966, 2.8978450801056574), (21.71599084929243, 1.9700225533981321)]
        ]
    );
    assert_teams_eq(
        &part,
        &[
            &[(18.970606361825787, 8.083791138387662), (28.61071656531274, 3.9727555689617384)],
            &[(28.263762930425475, 5.9704204055967605), (22.8776131461288, 4.982895116309968)],
            &[(27.963690986540957, 6.791178744841666)],
            &[(30.00281244677524, 2.9944197386609535), (23.556805531900107, 1.998347444241772)]
        ]
    );
}

#[test]
fn test_tau_with_sigma_guard() {
    init_test_env();

    let options = Options::default().with_tau(25.0 / 300.0, true);
    let result = rate(&fixture_teams(), &options).unwrap();

    assert_teams_eq(
        &result,
        &[
            &[(30.210227447000438, 4.765617924939384)],
            &[(27.644725221915632, 4.883479590134575)],
            &[(17.4036218889969, 6.101259408259549)],
            &[(19.21460876538932, 7.854669920480409)]
        ]
    );
}
