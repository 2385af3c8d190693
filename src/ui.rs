use crate::models::ExerciseLog;

pub fn render_index(date: &str, exercises: &[ExerciseLog], body_weight: Option<f64>) -> String {
    let total_volume: f64 = exercises.iter().map(ExerciseLog::total_volume).sum();
    let weight_display = body_weight
        .map(|w| format!("{w:.1} kg"))
        .unwrap_or_else(|| "--".to_string());

    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{EXERCISE_COUNT}}", &exercises.len().to_string())
        .replace("{{VOLUME}}", &format!("{total_volume:.0}"))
        .replace("{{BODY_WEIGHT}}", &weight_display)
        .replace("{{TODAY_LOG}}", &render_today_log(exercises))
}

fn render_today_log(exercises: &[ExerciseLog]) -> String {
    if exercises.is_empty() {
        return r#"<li class="log-empty">Nothing logged yet today.</li>"#.to_string();
    }

    let mut out = String::new();
    for log in exercises {
        let sets = log
            .sets
            .iter()
            .map(|set| format!("{} x {:.1} kg", set.reps, set.weight))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            r#"<li class="log-item" data-id="{id}"><span class="log-name">{name}</span><span class="log-sets">{sets}</span></li>"#,
            id = log.id,
            name = html_escape(&log.name),
            sets = sets,
        ));
    }
    out
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Fittrack</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4f0;
      --bg-2: #bcd8c6;
      --ink: #22302a;
      --accent: #2e8b57;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3efe6 60%, #f2f7f1 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c6a61;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      display: block;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7c897f;
    }

    .stat .value {
      display: block;
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.volume {
      color: var(--accent);
    }

    .forms {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 16px;
    }

    .form-card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
    }

    .form-card h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    label {
      font-size: 0.85rem;
      color: #6b7a6f;
      display: grid;
      gap: 4px;
    }

    input, select {
      font: inherit;
      padding: 9px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.18);
      width: 100%;
    }

    .set-row {
      display: grid;
      grid-template-columns: 1fr 1fr auto;
      gap: 8px;
      align-items: end;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 8px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(46, 139, 87, 0.3);
    }

    .btn-secondary {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .btn-ghost {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
      padding: 9px 14px;
    }

    .log {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .log-item {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      gap: 8px;
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 14px;
      padding: 12px 16px;
    }

    .log-name {
      font-weight: 600;
    }

    .log-sets {
      color: #6b7a6f;
    }

    .log-empty {
      color: #8b958d;
      padding: 8px 4px;
    }

    .chart-area {
      display: grid;
      gap: 16px;
    }

    .chart-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .chart-header h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #66736a;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-bar {
      fill: var(--accent);
      opacity: 0.85;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-axis {
      stroke: rgba(47, 72, 88, 0.25);
      stroke-dasharray: 4 6;
    }

    .chart-label {
      fill: #79857c;
      font-size: 11px;
    }

    .exercise-controls {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      align-items: center;
    }

    .exercise-controls select {
      width: auto;
      min-width: 220px;
    }

    .trend-badge {
      border-radius: 999px;
      padding: 6px 14px;
      font-weight: 600;
      font-size: 0.9rem;
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .trend-badge[data-direction="improving"] {
      background: rgba(46, 139, 87, 0.14);
      color: var(--accent);
    }

    .trend-badge[data-direction="declining"] {
      background: rgba(198, 59, 43, 0.12);
      color: #c63b2b;
    }

    .status {
      font-size: 0.95rem;
      color: #66736a;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f7a70;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Fittrack</h1>
      <p class="subtitle">Log your sets and body weight per day, then watch the progress charts move.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Date</span>
        <span id="date" class="value">{{DATE}}</span>
      </div>
      <div class="stat">
        <span class="label">Exercises today</span>
        <span id="exercise-count" class="value">{{EXERCISE_COUNT}}</span>
      </div>
      <div class="stat">
        <span class="label">Volume today (kg)</span>
        <span id="volume" class="value volume">{{VOLUME}}</span>
      </div>
      <div class="stat">
        <span class="label">Body weight</span>
        <span id="body-weight" class="value">{{BODY_WEIGHT}}</span>
      </div>
    </section>

    <section class="forms">
      <form class="form-card" id="exercise-form">
        <h2>Log an exercise</h2>
        <label>Exercise
          <select id="exercise-name"></select>
        </label>
        <label>Or a custom name
          <input type="text" id="custom-name" placeholder="Leave empty to use the selection" />
        </label>
        <div id="set-rows"></div>
        <button class="btn-ghost" type="button" id="add-set">Add set</button>
        <button class="btn-primary" type="submit">Save exercise</button>
      </form>

      <form class="form-card" id="weight-form">
        <h2>Body weight</h2>
        <label>Weight (kg)
          <input type="number" id="weight-input" step="0.1" min="0" placeholder="80.0" />
        </label>
        <button class="btn-secondary" type="submit">Save weight</button>
        <p class="hint">One entry per day; saving again replaces it.</p>
      </form>
    </section>

    <section>
      <h2>Today</h2>
      <ul class="log" id="today-log">{{TODAY_LOG}}</ul>
    </section>

    <section class="chart-area">
      <div class="chart-header">
        <div>
          <h2 id="chart-title">Body weight</h2>
          <p id="chart-subtitle" class="subtitle">Last 30 days.</p>
        </div>
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-tab="weight" role="tab" aria-selected="true">Weight</button>
          <button class="tab" type="button" data-tab="volume" role="tab" aria-selected="false">Volume</button>
          <button class="tab" type="button" data-tab="frequency" role="tab" aria-selected="false">Top exercises</button>
          <button class="tab" type="button" data-tab="exercise" role="tab" aria-selected="false">By exercise</button>
        </div>
      </div>
      <div class="exercise-controls" id="exercise-controls" hidden>
        <select id="progress-exercise"></select>
        <div class="tabs">
          <button class="tab active" type="button" data-metric="max_weight">Max</button>
          <button class="tab" type="button" data-metric="avg_weight">Average</button>
          <button class="tab" type="button" data-metric="total_volume">Volume</button>
        </div>
        <span class="trend-badge" id="trend-badge" hidden></span>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 600 260" aria-label="Progress chart" role="img"></svg>
      </div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Dates use server time. Charts cover the trailing 30 days.</p>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const chartTitleEl = document.getElementById('chart-title');
    const chartSubtitleEl = document.getElementById('chart-subtitle');
    const exerciseCountEl = document.getElementById('exercise-count');
    const volumeEl = document.getElementById('volume');
    const bodyWeightEl = document.getElementById('body-weight');
    const todayLogEl = document.getElementById('today-log');
    const nameSelect = document.getElementById('exercise-name');
    const customName = document.getElementById('custom-name');
    const setRowsEl = document.getElementById('set-rows');
    const exerciseControls = document.getElementById('exercise-controls');
    const progressExercise = document.getElementById('progress-exercise');
    const trendBadge = document.getElementById('trend-badge');
    const tabs = Array.from(document.querySelectorAll('[data-tab]'));
    const metricTabs = Array.from(document.querySelectorAll('[data-metric]'));

    let progressData = null;
    let activeTab = 'weight';
    let activeMetric = 'max_weight';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (value) => value
      .replace(/&/g, '&amp;')
      .replace(/</g, '&lt;')
      .replace(/>/g, '&gt;')
      .replace(/"/g, '&quot;');

    const addSetRow = (reps, weight) => {
      const row = document.createElement('div');
      row.className = 'set-row';
      row.innerHTML = `
        <label>Reps <input type="number" class="set-reps" min="0" step="1" /></label>
        <label>Weight (kg) <input type="number" class="set-weight" min="0" step="0.5" /></label>
        <button class="btn-ghost remove-set" type="button">Remove</button>
      `;
      row.querySelector('.set-reps').value = reps ?? '';
      row.querySelector('.set-weight').value = weight ?? '';
      row.querySelector('.remove-set').addEventListener('click', () => {
        if (setRowsEl.children.length > 1) {
          row.remove();
        }
      });
      setRowsEl.appendChild(row);
    };

    const readSets = () => {
      return Array.from(setRowsEl.querySelectorAll('.set-row')).map((row) => ({
        reps: Number(row.querySelector('.set-reps').value || 0),
        weight: Number(row.querySelector('.set-weight').value || 0)
      }));
    };

    const renderToday = (day) => {
      exerciseCountEl.textContent = day.exercises.length;
      const volume = day.exercises.reduce(
        (sum, log) => sum + log.sets.reduce((s, set) => s + set.reps * set.weight, 0),
        0
      );
      volumeEl.textContent = Math.round(volume);
      bodyWeightEl.textContent = day.body_weight != null ? `${day.body_weight.toFixed(1)} kg` : '--';

      todayLogEl.textContent = '';
      if (!day.exercises.length) {
        const li = document.createElement('li');
        li.className = 'log-empty';
        li.textContent = 'Nothing logged yet today.';
        todayLogEl.appendChild(li);
        return;
      }
      day.exercises.forEach((log) => {
        const li = document.createElement('li');
        li.className = 'log-item';
        const name = document.createElement('span');
        name.className = 'log-name';
        name.textContent = log.name;
        const sets = document.createElement('span');
        sets.className = 'log-sets';
        sets.textContent = log.sets.map((set) => `${set.reps} x ${set.weight.toFixed(1)} kg`).join(', ');
        li.append(name, sets);
        todayLogEl.appendChild(li);
      });
    };

    const renderLineChart = (points) => {
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const values = points.map((point) => point.value);
      let min = Math.min(...values);
      let max = Math.max(...values);
      min = Math.min(min, 0);
      max = Math.max(max, 0);
      if (min === max) {
        min -= 1;
        max += 1;
      }

      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${(Math.round(value * 10) / 10)}</text>`;
      }

      const labelEvery = points.length > 8 ? Math.ceil(points.length / 8) : 1;
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`;
        })
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="4" />`)
        .join('');

      const zeroLine = `<line class="chart-axis" x1="${paddingX}" y1="${y(0)}" x2="${width - paddingX}" y2="${y(0)}" />`;

      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.innerHTML = `${grid}${zeroLine}<path class="chart-line" d="${path}" />${circles}${xLabels}`;
    };

    const renderBarChart = (entries) => {
      if (!entries.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 24;
      const paddingY = 40;
      const max = Math.max(...entries.map((entry) => entry.count));
      const barSpace = (width - paddingX * 2) / entries.length;
      const barWidth = Math.min(64, barSpace * 0.6);

      let bars = '';
      entries.forEach((entry, index) => {
        const barHeight = max > 0 ? ((height - paddingY * 2) * entry.count) / max : 0;
        const x = paddingX + index * barSpace + (barSpace - barWidth) / 2;
        const y = height - paddingY - barHeight;
        // Truncate by code point, then escape: names are user input and the
        // bars string goes through innerHTML.
        const chars = [...entry.name];
        const label = chars.length > 14 ? `${chars.slice(0, 13).join('')}…` : entry.name;
        bars += `<rect class="chart-bar" x="${x.toFixed(1)}" y="${y.toFixed(1)}" width="${barWidth}" height="${barHeight.toFixed(1)}" rx="6" />`;
        bars += `<text class="chart-label" x="${(x + barWidth / 2).toFixed(1)}" y="${(y - 8).toFixed(1)}" text-anchor="middle">${entry.count}</text>`;
        bars += `<text class="chart-label" x="${(x + barWidth / 2).toFixed(1)}" y="${height - paddingY + 18}" text-anchor="middle">${escapeHtml(label)}</text>`;
      });

      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.innerHTML = bars;
    };

    const renderWeightTab = () => {
      chartTitleEl.textContent = 'Body weight';
      chartSubtitleEl.textContent = 'Only days with an entry are plotted.';
      renderLineChart(progressData.weight_series.map((point) => ({
        label: point.date.slice(5),
        value: point.weight
      })));
    };

    const renderVolumeTab = () => {
      chartTitleEl.textContent = 'Training volume';
      chartSubtitleEl.textContent = 'Sum of reps x weight per day.';
      renderLineChart(progressData.volume_series.map((point) => ({
        label: point.date.slice(5),
        value: point.total_volume
      })));
    };

    const renderFrequencyTab = () => {
      chartTitleEl.textContent = 'Top exercises';
      chartSubtitleEl.textContent = 'Most performed in the window.';
      renderBarChart(progressData.exercise_frequency);
    };

    const renderExerciseTab = async () => {
      const name = progressExercise.value;
      chartTitleEl.textContent = name || 'By exercise';
      trendBadge.hidden = true;
      if (!name) {
        chartSubtitleEl.textContent = 'Pick an exercise.';
        chartEl.innerHTML = '';
        return;
      }
      const res = await fetch(`/api/progress/exercise/${encodeURIComponent(name)}?metric=${activeMetric}`);
      if (!res.ok) {
        throw new Error('Unable to load exercise progress');
      }
      const data = await res.json();
      const metricLabel = activeMetric === 'max_weight' ? 'Max weight (kg)'
        : activeMetric === 'avg_weight' ? 'Average weight (kg)' : 'Total volume (kg)';
      chartSubtitleEl.textContent = `${metricLabel} per session.`;
      renderLineChart(data.points.map((point) => ({
        label: point.date.slice(5),
        value: activeMetric === 'max_weight' ? point.max_weight
          : activeMetric === 'avg_weight' ? point.avg_weight : point.total_volume
      })));
      if (data.trend) {
        trendBadge.hidden = false;
        trendBadge.textContent = data.trend.label;
        trendBadge.dataset.direction = data.trend.direction;
      }
    };

    const renderActiveTab = () => {
      if (!progressData) {
        return;
      }
      exerciseControls.hidden = activeTab !== 'exercise';
      if (activeTab === 'volume') {
        renderVolumeTab();
      } else if (activeTab === 'frequency') {
        renderFrequencyTab();
      } else if (activeTab === 'exercise') {
        renderExerciseTab().catch((err) => setStatus(err.message, 'error'));
      } else {
        renderWeightTab();
      }
    };

    const setActiveTab = (tab) => {
      activeTab = tab;
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      renderActiveTab();
    };

    const setActiveMetric = (metric) => {
      activeMetric = metric;
      metricTabs.forEach((button) => {
        button.classList.toggle('active', button.dataset.metric === metric);
      });
      renderActiveTab();
    };

    const loadToday = async () => {
      const res = await fetch('/api/today');
      if (!res.ok) {
        throw new Error('Unable to load today');
      }
      renderToday(await res.json());
    };

    const loadNames = async () => {
      const res = await fetch('/api/exercises/names');
      if (!res.ok) {
        throw new Error('Unable to load exercise names');
      }
      const names = await res.json();
      nameSelect.textContent = '';
      progressExercise.textContent = '';
      const placeholder = document.createElement('option');
      placeholder.value = '';
      placeholder.textContent = 'Pick an exercise…';
      progressExercise.appendChild(placeholder);
      names.forEach((name) => {
        const option = document.createElement('option');
        option.value = name;
        option.textContent = name;
        nameSelect.appendChild(option.cloneNode(true));
        progressExercise.appendChild(option);
      });
    };

    const loadProgress = async () => {
      const res = await fetch('/api/progress');
      if (!res.ok) {
        throw new Error('Unable to load progress');
      }
      progressData = await res.json();
      renderActiveTab();
    };

    const refresh = async () => {
      await Promise.all([loadToday(), loadProgress()]);
    };

    const postJson = async (url, method, body) => {
      const res = await fetch(url, {
        method,
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    document.getElementById('exercise-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const name = customName.value.trim() || nameSelect.value;
      const sets = readSets();
      setStatus('Saving...', 'info');
      postJson('/api/exercises', 'POST', {
        date: document.getElementById('date').textContent,
        name,
        sets
      })
        .then(() => {
          customName.value = '';
          setStatus('Saved', 'ok');
          setTimeout(() => setStatus('', ''), 1200);
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('weight-form').addEventListener('submit', (event) => {
      event.preventDefault();
      setStatus('Saving...', 'info');
      postJson('/api/body-weight', 'PUT', {
        date: document.getElementById('date').textContent,
        weight: Number(document.getElementById('weight-input').value)
      })
        .then(() => {
          setStatus('Saved', 'ok');
          setTimeout(() => setStatus('', ''), 1200);
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('add-set').addEventListener('click', () => addSetRow('', ''));

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });
    metricTabs.forEach((button) => {
      button.addEventListener('click', () => setActiveMetric(button.dataset.metric));
    });
    progressExercise.addEventListener('change', () => renderActiveTab());

    addSetRow('', '');
    loadNames()
      .then(() => refresh())
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SetEntry;

    fn log(name: &str) -> ExerciseLog {
        ExerciseLog {
            id: 1,
            name: name.to_string(),
            date: "2024-01-01".to_string(),
            sets: vec![SetEntry {
                reps: 5,
                weight: 10.0,
            }],
        }
    }

    #[test]
    fn today_log_escapes_markup_in_names() {
        let html = render_index("2024-01-01", &[log(r#"Press < 90 & "x""#)], None);
        assert!(html.contains("Press &lt; 90 &amp; &quot;x&quot;"));
        assert!(!html.contains(r#"Press < 90 & "x""#));
    }

    #[test]
    fn chart_labels_route_through_the_escape_helper() {
        // Frequency bar labels carry user-entered names into innerHTML, so
        // the template must run them through its escape helper.
        assert!(INDEX_HTML.contains("const escapeHtml"));
        assert!(INDEX_HTML.contains("${escapeHtml(label)}"));
    }
}
